#[path = "../support/mod.rs"]
mod support;

use rstest::rstest;
use support::ScriptedDialogs;
use tmeon::services::download_gatekeeper::{DownloadGatekeeper, DownloadGatekeeperTrait};
use tmeon::types::config::BrowserConfig;
use tmeon::types::download::{DownloadRequest, DownloadState};

#[test]
fn test_executable_declined_is_cancelled() {
    let gatekeeper = DownloadGatekeeper::default();
    let dialogs = ScriptedDialogs::answering(false);
    let mut request = DownloadGatekeeper::request_for("https://host/dl/setup.EXE", None);

    assert_eq!(gatekeeper.review(&mut request, &dialogs), DownloadState::Cancelled);
    assert_eq!(request.state(), DownloadState::Cancelled);

    let shown = dialogs.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Warning");
    assert!(shown[0].message.contains("setup.EXE"));
    assert!(!shown[0].message.contains("https://host"));
}

#[test]
fn test_executable_confirmed_is_accepted() {
    let gatekeeper = DownloadGatekeeper::default();
    let dialogs = ScriptedDialogs::answering(true);
    let mut request = DownloadGatekeeper::request_for("https://host/install.sh", None);

    assert_eq!(gatekeeper.review(&mut request, &dialogs), DownloadState::Accepted);
    assert_eq!(dialogs.confirmations(), 1);
}

#[test]
fn test_document_is_accepted_without_prompt() {
    let gatekeeper = DownloadGatekeeper::default();
    let dialogs = ScriptedDialogs::answering(false);
    let mut request = DownloadGatekeeper::request_for("https://host/report.pdf", None);

    assert_eq!(gatekeeper.review(&mut request, &dialogs), DownloadState::Accepted);
    assert!(dialogs.shown().is_empty());
}

#[test]
fn test_file_without_extension_is_accepted_without_prompt() {
    let gatekeeper = DownloadGatekeeper::default();
    let dialogs = ScriptedDialogs::answering(false);
    let mut request = DownloadGatekeeper::request_for("https://host/README", None);

    assert!(request.extension.is_none());
    assert_eq!(gatekeeper.review(&mut request, &dialogs), DownloadState::Accepted);
    assert!(dialogs.shown().is_empty());
}

#[rstest]
#[case("setup.exe", true)]
#[case("SETUP.EXE", true)]
#[case("package.msi", true)]
#[case("run.bat", true)]
#[case("run.Cmd", true)]
#[case("install.sh", true)]
#[case("archive.tar.gz", false)]
#[case("exe", false)]
#[case("notes.exe.txt", false)]
#[case("photo.png", false)]
fn test_requires_confirmation(#[case] file_name: &str, #[case] expected: bool) {
    let gatekeeper = DownloadGatekeeper::default();
    let request = DownloadRequest::new("https://host/x", file_name);
    assert_eq!(gatekeeper.requires_confirmation(&request), expected, "{file_name}");
}

#[test]
fn test_query_string_cannot_hide_extension() {
    let gatekeeper = DownloadGatekeeper::default();
    let request =
        DownloadGatekeeper::request_for("https://host/setup.exe?name=report.pdf", Some("report.pdf"));
    assert_eq!(request.file_name, "setup.exe");
    assert!(gatekeeper.requires_confirmation(&request));
}

#[test]
fn test_decided_request_is_not_reviewed_again() {
    let gatekeeper = DownloadGatekeeper::default();
    let dialogs = ScriptedDialogs::answering(false);
    let mut request = DownloadGatekeeper::request_for("https://host/setup.exe", None);

    gatekeeper.review(&mut request, &dialogs);
    dialogs.set_answer(true);
    assert_eq!(gatekeeper.review(&mut request, &dialogs), DownloadState::Cancelled);
    assert_eq!(dialogs.confirmations(), 1);
}

#[test]
fn test_custom_extension_list() {
    let gatekeeper = DownloadGatekeeper::new([".APK", "jar"]);
    assert!(gatekeeper.requires_confirmation(&DownloadRequest::new("u", "app.apk")));
    assert!(gatekeeper.requires_confirmation(&DownloadRequest::new("u", "tool.jar")));
    assert!(!gatekeeper.requires_confirmation(&DownloadRequest::new("u", "setup.exe")));
}

#[test]
fn test_gatekeeper_from_config() {
    let mut config = BrowserConfig::default();
    config.executable_extensions = vec!["dmg".to_string()];
    let gatekeeper = DownloadGatekeeper::from_config(&config);
    assert!(gatekeeper.requires_confirmation(&DownloadRequest::new("u", "App.DMG")));
}

#[test]
fn test_prompt_message_names_file() {
    assert_eq!(
        DownloadGatekeeper::prompt_message("setup.exe"),
        "Are you sure you want to download 'setup.exe'? If it's executable, it might be a risk to your PC."
    );
}

#[test]
fn test_request_state_transitions_once() {
    let mut request = DownloadRequest::new("https://host/a.exe", "a.exe");
    assert!(request.is_pending());
    request.accept();
    request.cancel();
    assert_eq!(request.state(), DownloadState::Accepted);
}
