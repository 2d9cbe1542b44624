use super::*;

#[test]
fn site_menu_has_three_sections_in_order() {
    let labels: Vec<_> = SITE_MENU.iter().map(|m| m.label).collect();
    assert_eq!(labels, ["Training Solutions", "Resources", "Company"]);
    assert_eq!(SITE_MENU[1].children.len(), 5);
}

#[test]
fn every_menu_entry_has_a_description() {
    for item in &SITE_MENU {
        assert!(!item.description.is_empty());
        for child in item.children {
            assert!(!child.description.is_empty(), "{} has no description", child.label);
        }
    }
}

#[test]
fn panel_falls_back_to_parent_when_nothing_hovered() {
    let company = &SITE_MENU[2];
    assert_eq!(company.panel_title(None), "Company");
    assert_eq!(company.panel_description(None), company.description);
    assert_eq!(company.panel_title(Some("Careers")), "Careers");
    assert!(company.panel_description(Some("Careers")).starts_with("Join our team"));
    assert_eq!(company.panel_title(Some("Blog")), "Company");
}

#[test]
fn blog_is_the_only_external_link() {
    let external: Vec<_> =
        SITE_MENU.iter().flat_map(|m| m.children.iter()).filter(|c| c.is_external()).map(|c| c.label).collect();
    assert_eq!(external, ["Blog"]);
}

#[test]
fn contact_items_link_mail_and_phone() {
    assert_eq!(CONTACT_ITEMS[0].href, Some("mailto:contact@envesti.com"));
    assert_eq!(CONTACT_ITEMS[1].href, Some("tel:+15551234567"));
}

#[test]
fn display_name_capitalizes_dash_separated_words() {
    assert_eq!(display_name("dashboard"), "Dashboard");
    assert_eq!(display_name("case-files"), "Case Files");
}

#[test]
fn unknown_folders_get_generated_description() {
    assert_eq!(folder_description("people"), "Manage organization members");
    assert_eq!(folder_description("case-files"), "Case Files management");
}

#[test]
fn account_navigation_nests_organization_children() {
    let nav = account_navigation();
    assert_eq!(nav.len(), 5);
    let org = &nav[1];
    assert_eq!(org.href, "/account/organization");
    let hrefs: Vec<_> = org.children.iter().map(|c| c.href.as_str()).collect();
    assert_eq!(hrefs, ["/account/organization/people", "/account/organization/departments"]);
    assert_eq!(org.children[1].name, "Departments");
}

#[test]
fn profile_entry_points_at_profile_page() {
    let profile = profile_entry();
    assert_eq!(profile.href, "/account/profile");
    assert_eq!(profile.description, "Your account and preferences");
}

#[test]
fn footer_columns_hold_five_links_each() {
    assert_eq!(QUICK_LINKS[0], FooterLink { label: "Home", href: "/" });
    assert_eq!(COMPANY_LINKS.iter().map(|l| l.label).collect::<Vec<_>>(), [
        "Careers",
        "Partners",
        "Privacy Policy",
        "Terms of Service",
        "Support"
    ]);
    assert_eq!(SOCIAL_LINKS.len(), 3);
}
