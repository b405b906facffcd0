use std::sync::Arc;

use anyhow::Result;
use catchment::{Map, Plan, SearchConfig};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::InputArgs) -> Result<()> {
    let map = Arc::new(Map::read_from_files(&args.blocks, &args.distances)?);
    let plan = Plan::from_config(map, &SearchConfig::default())?;
    let global = plan.global_stats();

    println!("[inspect] {} blocks, {} districts", plan.map().num_blocks(), plan.num_districts());
    println!("[inspect] mean share {:.5}, std dev {:.5}", global.mean, global.std_dev);
    println!("school_id\tblocks\tshare\tz\tstudents\tlimit\tmax_distance");
    for district in plan.districts() {
        println!(
            "{}\t{}\t{:.5}\t{:.5}\t{}\t{:.1}\t{:.1}",
            district.school.0,
            district.blocks.len(),
            district.optimization_value,
            global.z(district.optimization_value),
            district.student_count,
            district.caps.student_limit,
            district.caps.max_distance,
        );
    }
    println!("[inspect] cumulative z-value {:.5}", plan.cumulative_z(&global));

    Ok(())
}
