use costudy_server::config::AppConfig;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn root_reports_liveness() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::ROOT).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        res.text,
        format!(
            "{} Server running .................",
            AppConfig::get().app.system_name
        )
    );
}
