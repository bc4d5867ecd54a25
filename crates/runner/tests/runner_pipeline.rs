//! Runner Pipeline Integration Test
//!
//! Writes a small panel to disk, runs the full scan and checks both reports:
//! - Full-panel scan with the default special-treatment marker
//! - Single-date scan
//! - Restricted list loaded from a file
//! - Invalid panels produce no reports

use std::fs;
use std::path::Path;

use limitup_ports::PanelError;
use limitup_runner::{RunnerConfig, RunnerError, run};

const PANEL: &str = "\
ts_code,trade_date,open,high,low,close
600519.SH,20240603,10.00,10.10,9.90,10.00
600519.SH,20240604,10.50,11.00,10.40,11.00
600519.SH,20240605,11.20,12.10,11.00,11.50
300750.SZ,20240603,20.00,20.20,19.80,20.00
300750.SZ,20240604,21.00,24.00,21.00,23.00
300750.SZ,20240605,23.00,23.50,22.80,23.10
ST0001,20240603,5.00,5.00,5.00,5.00
ST0001,20240604,5.50,5.50,5.50,5.50
";

fn config_for(dir: &Path) -> RunnerConfig {
    let input = dir.join("panel.csv");
    fs::write(&input, PANEL).unwrap();
    RunnerConfig {
        input_path: input,
        output_dir: dir.join("out"),
        utf8_bom: false,
        ..Default::default()
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_scan_writes_reports() {
    let _ = env_logger::try_init();
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let report = run(&config).unwrap();

    assert_eq!(report.bars_loaded, 8);
    assert_eq!(report.counts.sealed, 1);
    assert_eq!(report.counts.broken, 2);
    assert_eq!(report.counts.total, 3);

    assert_eq!(
        read_lines(&report.summary_path),
        vec![
            "trade_date,sealed_count,broken_count,total_count",
            "2024-06-03,0,0,0",
            "2024-06-04,1,1,2",
            "2024-06-05,0,1,1",
        ]
    );
    assert_eq!(
        read_lines(&report.events_path),
        vec![
            "instrument,trade_date,open,close,high,low,limit_price,limit_event",
            "300750.SZ,2024-06-04,21.00,23.00,24.00,21.00,24.00,BROKEN",
            "600519.SH,2024-06-04,10.50,11.00,11.00,10.40,11.00,SEALED",
            "600519.SH,2024-06-05,11.20,11.50,12.10,11.00,12.10,BROKEN",
        ]
    );
}

#[test]
fn test_single_date_scan() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());
    config.target_date = chrono::NaiveDate::from_ymd_opt(2024, 6, 5);

    let report = run(&config).unwrap();

    assert_eq!(report.counts.total, 1);
    assert_eq!(
        read_lines(&report.summary_path),
        vec![
            "trade_date,sealed_count,broken_count,total_count",
            "2024-06-05,0,1,1",
        ]
    );
}

#[test]
fn test_restricted_file_and_no_marker() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());
    let restricted = dir.path().join("restricted.txt");
    fs::write(&restricted, "# special treatment\n600519.SH\n\n").unwrap();
    config.exclusion.kind = "list".to_string();
    config.exclusion.restricted_file = Some(restricted);

    let report = run(&config).unwrap();

    // 600519.SH suppressed, ST0001 no longer filtered by name
    assert_eq!(report.counts.broken, 1);
    assert_eq!(report.counts.sealed, 1);
    let events = read_lines(&report.events_path);
    assert!(events.iter().any(|l| l.starts_with("ST0001,2024-06-04")));
    assert!(!events.iter().any(|l| l.starts_with("600519.SH")));
}

#[test]
fn test_duplicate_rows_abort_without_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let mut panel = PANEL.to_string();
    panel.push_str("600519.SH,2024-06-04,10.50,11.00,10.40,11.00\n");
    fs::write(&config.input_path, panel).unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(err, RunnerError::Panel(_)));
    assert!(!config.summary_path().exists());
    assert!(!config.events_path().exists());
}

#[test]
fn test_overflowing_close_aborts_without_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let mut panel = PANEL.to_string();
    panel.push_str("000001.SZ,20240603,1.00,1.00,1.00,79228162514264337593543950335\n");
    panel.push_str("000001.SZ,20240604,1.00,1.00,1.00,1.00\n");
    fs::write(&config.input_path, panel).unwrap();

    let err = run(&config).unwrap_err();

    match err {
        RunnerError::Panel(PanelError::InvalidValue { row, column, .. }) => {
            assert_eq!(row, 9);
            assert_eq!(column, "close");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!config.summary_path().exists());
    assert!(!config.events_path().exists());
}

#[test]
fn test_json_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let base = config_for(dir.path());
    let config_path = dir.path().join("limitup.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"input_path": {:?}, "output_dir": {:?}, "utf8_bom": false, "engine": {{"rounding": "half_even"}}}}"#,
            base.input_path, base.output_dir
        ),
    )
    .unwrap();

    let config = RunnerConfig::from_file(&config_path).unwrap();
    let report = run(&config).unwrap();
    assert_eq!(report.counts.total, 3);
}
