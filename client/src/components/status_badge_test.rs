use super::*;

#[test]
fn badge_style_uses_status_colors() {
    let style = badge_style(KanbanStatus::Reviewing.config());
    assert_eq!(style, "color: #fa8c16; background-color: #fff7e6; border-color: #fa8c16;");
}

#[test]
fn icon_class_prefixes_icon_id() {
    assert_eq!(icon_class(KanbanStatus::Failed.config().icon), "icon icon--close-circle");
}
