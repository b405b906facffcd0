use ahash::AHashMap;
use geo::MultiPolygon;

use crate::{
    error::{Result, SearchError},
    geom::Geometries,
    map::{Block, BlockId, DistanceTable, SchoolId},
};

/// The fixed input snapshot: every block in the study area, the schools that
/// anchor the districts, and the walking-distance table.
///
/// Blocks and districts are stored as flat tables; internal code addresses
/// them by contiguous index (blocks in ascending `BlockId` order, districts in
/// ascending `SchoolId` order).
#[derive(Debug)]
pub struct Map {
    blocks: Vec<Block>,
    index: AHashMap<BlockId, usize>,
    geoms: Geometries,
    schools: Vec<SchoolId>,
    school_index: AHashMap<SchoolId, usize>,
    distances: Vec<AHashMap<usize, f64>>, // distances[district][block]
    initial: Vec<usize>,                  // initial[block] = district
}

impl Map {
    /// Build the snapshot from blocks and a distance table.
    ///
    /// Districts are the distinct `school` values of the blocks. Distance
    /// entries for unknown schools or blocks are ignored.
    pub fn new(mut blocks: Vec<Block>, distances: &DistanceTable) -> Result<Self> {
        if blocks.is_empty() {
            return Err(SearchError::invalid_input("no blocks"));
        }

        blocks.sort_by_key(|block| block.id);
        if let Some(pair) = blocks.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(SearchError::invalid_input(format!("duplicate block {}", pair[0].id)));
        }

        let index = blocks.iter().enumerate()
            .map(|(i, block)| (block.id, i))
            .collect::<AHashMap<_, _>>();

        let mut schools = blocks.iter().map(|block| block.school).collect::<Vec<_>>();
        schools.sort_unstable();
        schools.dedup();

        let school_index = schools.iter().enumerate()
            .map(|(d, &school)| (school, d))
            .collect::<AHashMap<_, _>>();

        let initial = blocks.iter().map(|block| school_index[&block.school]).collect();

        let mut table = vec![AHashMap::new(); schools.len()];
        let mut skipped = 0usize;
        for (school, block, distance) in distances.iter() {
            if !distance.is_finite() || distance < 0.0 {
                return Err(SearchError::invalid_input(format!(
                    "distance from {block} to {school} must be finite and non-negative, got {distance}"
                )));
            }
            match (school_index.get(&school), index.get(&block)) {
                (Some(&d), Some(&i)) => { table[d].insert(i, distance); }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("[map] ignored {skipped} distance entries for unknown schools or blocks");
        }

        let geoms = Geometries::new(blocks.iter().map(|block| block.geometry.clone()).collect())?;

        Ok(Self { blocks, index, geoms, schools, school_index, distances: table, initial })
    }

    /// Number of blocks in the study area.
    #[inline] pub fn num_blocks(&self) -> usize { self.blocks.len() }

    /// Number of districts (one per school).
    #[inline] pub fn num_districts(&self) -> usize { self.schools.len() }

    /// All blocks, in ascending id order.
    #[inline] pub fn blocks(&self) -> &[Block] { &self.blocks }

    /// All schools, in ascending id order.
    #[inline] pub fn schools(&self) -> &[SchoolId] { &self.schools }

    /// Look up a block by id.
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.index.get(&id).map(|&i| &self.blocks[i])
    }

    /// Walking distance from `block` to `school`, if recorded.
    pub fn distance(&self, school: SchoolId, block: BlockId) -> Option<f64> {
        let d = *self.school_index.get(&school)?;
        let i = *self.index.get(&block)?;
        self.distance_at(d, i)
    }

    #[inline] pub(crate) fn block_at(&self, idx: usize) -> &Block { &self.blocks[idx] }

    #[inline] pub(crate) fn block_index(&self, id: BlockId) -> Option<usize> { self.index.get(&id).copied() }

    #[inline] pub(crate) fn school_at(&self, district: usize) -> SchoolId { self.schools[district] }

    #[inline] pub(crate) fn district_index(&self, school: SchoolId) -> Option<usize> { self.school_index.get(&school).copied() }

    #[inline] pub(crate) fn geoms(&self) -> &Geometries { &self.geoms }

    #[inline] pub(crate) fn geometry_at(&self, idx: usize) -> &MultiPolygon<f64> { self.geoms.shape(idx) }

    /// District index of every block in the input snapshot.
    #[inline] pub(crate) fn initial_assignments(&self) -> &[usize] { &self.initial }

    #[inline]
    pub(crate) fn distance_at(&self, district: usize, block: usize) -> Option<f64> {
        self.distances[district].get(&block).copied()
    }

    /// Walking distance or a `MissingDistanceEntry` error.
    pub(crate) fn require_distance(&self, district: usize, block: usize) -> Result<f64> {
        self.distance_at(district, block).ok_or_else(|| SearchError::MissingDistanceEntry {
            school: self.schools[district],
            block: self.blocks[block].id,
        })
    }
}
