//! Test modules for the executor crate.


use std::sync::Arc;

use neodb_storage::load_from_reader;

use crate::{Executor, NeoConfig};

/// Three close approaches: alpha twice (hazardous), beta once.
pub(crate) const THREE_ROWS: &str = "\
id,name,estimated_diameter_min_kilometers,is_potentially_hazardous_asteroid,close_approach_date,miss_distance_kilometers
1,alpha,1.2,True,2020-01-01,1000000
1,alpha,1.2,True,2020-01-02,9000000
2,beta,0.3,False,2020-01-03,3000000
";

/// Executor over [`THREE_ROWS`] with default configuration.
pub(crate) fn create_test_executor() -> Executor {
    let store = load_from_reader(THREE_ROWS.as_bytes(), "fixture").unwrap();
    Executor::new(Arc::new(store), NeoConfig::default())
}
