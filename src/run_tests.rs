//! Tests for the run module.

use super::*;
use hostwatch::config::Cli;
use hostwatch::state::{HostState, StateStore};
use tempfile::TempDir;

fn config_for(path: &std::path::Path) -> ValidatedConfig {
    let cli = Cli::parse_from_iter([
        "hostwatch",
        "--history-file",
        path.to_str().unwrap(),
        "--discord-channel",
        "https://discord.example/api/webhooks/1/abc",
        "--message-prefix",
        "edge-01",
    ]);
    ValidatedConfig::from_cli(&cli).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn startup_error_displays_source() {
        let error = RunError::from(StateError::Serialize(
            serde_json::from_str::<u8>("x").unwrap_err(),
        ));
        assert!(error.to_string().starts_with("Failed to initialise state"));
    }

    #[test]
    fn runtime_error_displays_source() {
        let error = RunError::Runtime(std::io::Error::other("no threads"));
        assert_eq!(error.to_string(), "Failed to create runtime: no threads");
    }
}

mod build_monitor {
    use super::*;

    #[test]
    fn initialises_missing_state_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let monitor = build_monitor(&config_for(&path)).unwrap();

        assert!(path.exists());
        assert_eq!(monitor.baseline(), &HostState::default());
        assert_eq!(monitor.interval(), std::time::Duration::from_secs(10));
    }

    #[test]
    fn picks_up_existing_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"{"local_ips": ["10.0.0.5"], "public_ip": "1.2.3.4", "uptime": "Uptime: 1 days"}"#,
        )
        .unwrap();

        let monitor = build_monitor(&config_for(&path)).unwrap();

        assert_eq!(
            monitor.baseline(),
            &HostState::sampled(vec!["10.0.0.5".into()], "1.2.3.4".into())
        );
        assert!(FileStateStore::new(&path).load().is_ok());
    }

    #[test]
    fn corrupt_state_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = build_monitor(&config_for(&path));

        assert!(matches!(result, Err(RunError::Startup(_))));
    }
}
