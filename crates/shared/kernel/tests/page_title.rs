use proptest::prelude::*;
use shub_kernel::server::page::PageMeta;

proptest! {
    // Any non-empty app name lands verbatim after the " - " separator.
    #[test]
    fn contact_title_holds_for_any_app_name(app_name in "[^\\r\\n]{1,64}") {
        let meta = PageMeta::titled("Contact Us", &app_name);
        prop_assert_eq!(meta.title, format!("Contact Us - {app_name}"));
    }

    #[test]
    fn foia_title_holds_for_any_app_name(app_name in "[^\\r\\n]{1,64}") {
        let meta = PageMeta::titled("FOIA Toolkit", &app_name);
        prop_assert_eq!(meta.title, format!("FOIA Toolkit - {app_name}"));
    }
}

#[test]
fn repeated_renders_are_byte_identical() {
    let first = PageMeta::titled("Contact Us", "Acme Corp");
    let second = PageMeta::titled("Contact Us", "Acme Corp");
    assert_eq!(first, second);
    assert_eq!(first.title.as_bytes(), second.title.as_bytes());
}

#[test]
fn changed_app_name_changes_the_title() {
    let before = PageMeta::titled("FOIA Toolkit", "Acme Corp");
    let after = PageMeta::titled("FOIA Toolkit", "Acme Inc");
    assert_ne!(before.title, after.title);
    assert_eq!(after.title, "FOIA Toolkit - Acme Inc");
}
