use super::*;

#[test]
fn flows_url_uses_configured_page_size() {
    let config = ClientConfig::default();
    assert_eq!(flows_url(&config, None), "/api/flows?limit=100&offset=0");
    assert_eq!(flows_url(&config, Some(4)), "/api/flows?limit=100&offset=0&config_id=4");
}

#[test]
fn configs_url_filters_by_configured_status() {
    let config = ClientConfig::default();
    assert_eq!(configs_url(&config), "/api/configs?status=1");
}

#[test]
fn status_update_url_targets_single_flow() {
    let config = ClientConfig { api_base: "/backend/".to_owned(), ..ClientConfig::default() };
    assert_eq!(status_update_url(&config, 42), "/backend/flows/42");
}

#[test]
fn upload_url_targets_selected_config() {
    let config = ClientConfig::default();
    assert_eq!(upload_url(&config, 7), "/api/flows/upload?config_id=7");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("flows", 502), "flows request failed: 502");
}
