use super::*;

// =============================================================
// SectionId
// =============================================================

#[test]
fn every_section_round_trips_through_its_dom_id() {
    for section in SectionId::ALL {
        assert_eq!(SectionId::from_dom_id(section.dom_id()), Some(section));
    }
}

#[test]
fn unknown_dom_ids_resolve_to_nothing() {
    assert_eq!(SectionId::from_dom_id(""), None);
    assert_eq!(SectionId::from_dom_id("varanda"), None);
    assert_eq!(SectionId::from_dom_id("Momentos"), None);
}

#[test]
fn dom_ids_are_unique() {
    for (i, a) in SectionId::ALL.iter().enumerate() {
        for (j, b) in SectionId::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.dom_id(), b.dom_id());
            }
        }
    }
}

#[test]
fn nav_links_skip_hero_and_contact() {
    for (section, _) in NAV_SECTIONS {
        assert_ne!(section, SectionId::Home);
        assert_ne!(section, SectionId::Contato);
    }
}

// =============================================================
// Content tables
// =============================================================

#[test]
fn content_tables_carry_no_blank_copy() {
    for item in &GALLERY_ITEMS {
        assert!(!item.image_url.is_empty());
        assert!(!item.caption.is_empty());
    }
    for step in &PROCESS_STEPS {
        assert!(!step.title.is_empty());
        assert!(!step.detail.is_empty());
    }
    for plan in &PLANS {
        assert!(!plan.tag.is_empty());
        assert!(!plan.title.is_empty());
        assert!(!plan.price.is_empty());
    }
    for stat in &HERO_STATS {
        assert!(!stat.value.is_empty());
        assert!(!stat.label.is_empty());
    }
}

#[test]
fn plan_accent_classes_are_distinct() {
    assert_ne!(PlanAccent::Leaf.css_class(), PlanAccent::Sun.css_class());
    assert_ne!(PlanAccent::Sun.css_class(), PlanAccent::Wood.css_class());
    assert_ne!(PlanAccent::Leaf.css_class(), PlanAccent::Wood.css_class());
}
