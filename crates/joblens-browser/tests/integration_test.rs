use joblens_browser::{BrowserActions, LaunchConfig, Session};

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_session_launch() {
    let session = Session::launch(LaunchConfig::default()).await;
    assert!(session.is_ok(), "Failed to launch browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_navigation_and_probe() {
    let mut session = Session::launch(LaunchConfig::default())
        .await
        .expect("launch session");

    session
        .navigate("https://example.com")
        .await
        .expect("navigate");

    assert!(session.exists("h1").await.expect("probe h1"));
    assert!(!session.exists("#no-such-element").await.expect("probe absent"));
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_pointer_moves_stay_in_viewport() {
    let mut session = Session::launch(LaunchConfig::default())
        .await
        .expect("launch session");

    session
        .navigate("https://example.com")
        .await
        .expect("navigate");

    // In-bounds move succeeds, an absurd offset is skipped
    assert!(session.try_move_pointer(10, 10).await.expect("small move"));
    assert!(!session
        .try_move_pointer(100_000, 100_000)
        .await
        .expect("oversized move"));
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_cookie_export_import() {
    let mut session = Session::launch(LaunchConfig::default())
        .await
        .expect("launch session");

    session
        .navigate("https://example.com")
        .await
        .expect("navigate");

    let cookies = session.export_cookies().await.expect("export cookies");
    session
        .import_cookies(&cookies)
        .await
        .expect("import cookies");
    session.clear_cookies().await.expect("clear cookies");
}
