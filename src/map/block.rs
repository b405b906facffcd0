use geo::MultiPolygon;

use crate::map::{BlockId, SchoolId};

/// A residential block: the smallest unit that can change district.
///
/// Everything here is fixed for the lifetime of a run. The block's *current*
/// owner is tracked by the partition's ownership index; `school` records the
/// district it belongs to in the input snapshot.
#[derive(Clone, Debug)]
pub struct Block {
    pub id: BlockId,
    pub school: SchoolId,
    /// Residents whose mother tongue is a majority language.
    pub majority: u32,
    /// Residents whose mother tongue is any other language.
    pub minority: u32,
    /// 7-year-olds living in the block.
    pub students: u32,
    /// The block hosts a school building and can never change district.
    pub contains_school: bool,
    pub geometry: MultiPolygon<f64>,
}
