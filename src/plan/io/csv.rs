use std::path::Path;

use anyhow::Result;

use crate::plan::Plan;

impl Plan {
    /// Write the `block_id,school_id` block assignment to a CSV file.
    pub fn write_to_csv(&self, path: &Path) -> Result<()> {
        let mut df = crate::io::csv::assignment_frame(&self.assignments())?;
        crate::io::csv::write_csv(&mut df, path)
    }

    /// Generate the CSV block assignment as a string.
    pub fn to_csv(&self) -> Result<String> {
        let mut df = crate::io::csv::assignment_frame(&self.assignments())?;
        crate::io::csv::write_csv_string(&mut df)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        map::{BlockId, SchoolId},
        partition::testing::{GridBlock, grid_map},
        plan::Plan,
    };

    #[test]
    fn assignment_follows_transfers() {
        let map = grid_map(&[
            GridBlock::new(0, 0, 3).distance(3, 1.0),
            GridBlock::new(1, 0, 3).distance(3, 1.0),
            GridBlock::new(2, 0, 5).distance(5, 1.0),
        ]);
        let mut plan = Plan::new(map, 1.2).unwrap();
        plan.transfer(BlockId(1), SchoolId(5)).unwrap();

        assert_eq!(plan.to_csv().unwrap(), "block_id,school_id\n0,3\n1,5\n2,5\n");
    }

    #[test]
    fn writes_to_disk() {
        let map = grid_map(&[GridBlock::new(0, 0, 1).distance(1, 1.0)]);
        let plan = Plan::new(map, 1.2).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignment.csv");
        plan.write_to_csv(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "block_id,school_id\n0,1\n");
    }
}
