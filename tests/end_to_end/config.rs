//! Configuration from `neodb.toml`.

use crate::common::*;
use neodb::{Command, Error, Executor, NeoConfig, QueryParams, CONFIG_FILE_NAME};

#[test]
fn config_file_drives_executor() {
    let ws = Workspace::with_data(&week_rows());
    let config_path = ws.dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &config_path,
        format!(
            "data_file = {:?}\ndefault_number = 2\n",
            ws.config.data_file.display().to_string()
        ),
    )
    .unwrap();

    let config = NeoConfig::from_file(&config_path).unwrap();
    assert_eq!(config.default_number, 2);
    let executor = Executor::open(config).unwrap();

    let output = executor
        .execute(Command::Search {
            query: QueryParams::between("2021-03-01", "2021-03-07"),
        })
        .unwrap();
    assert_eq!(neo_names(&output), vec!["alpha", "beta"]);
}

#[test]
fn setup_writes_loadable_defaults() {
    let ws = Workspace::with_data(&three_rows());
    let config_path = ws.dir.path().join(CONFIG_FILE_NAME);

    assert!(NeoConfig::write_default_if_missing(&config_path).unwrap());
    assert!(!NeoConfig::write_default_if_missing(&config_path).unwrap());
    assert_eq!(
        NeoConfig::from_file_or_default(&config_path).unwrap(),
        NeoConfig::default()
    );
}

#[test]
fn missing_data_file_fails_to_open() {
    let ws = Workspace::with_data(&three_rows());
    let config = ws.config.clone().with_data_file(ws.dir.path().join("gone.csv"));
    assert!(matches!(Executor::open(config), Err(Error::Load { .. })));
}

#[test]
fn malformed_data_file_fails_to_open() {
    let ws = Workspace::with_data("id,name\n1,a,extra\n");
    assert!(matches!(
        Executor::open(ws.config.clone()),
        Err(Error::Load { .. })
    ));
}
