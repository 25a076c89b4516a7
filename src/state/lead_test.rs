use super::*;

// =============================================================
// InquiryKind
// =============================================================

#[test]
fn default_category_is_rentability() {
    assert_eq!(InquiryKind::default(), InquiryKind::Rentability);
}

#[test]
fn labels_are_distinct() {
    for (i, a) in InquiryKind::ALL.iter().enumerate() {
        for (j, b) in InquiryKind::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

#[test]
fn from_label_round_trips_every_category() {
    for kind in InquiryKind::ALL {
        assert_eq!(InquiryKind::from_label(kind.label()), kind);
    }
}

#[test]
fn unknown_labels_fall_back_to_the_default() {
    assert_eq!(InquiryKind::from_label(""), InquiryKind::default());
    assert_eq!(InquiryKind::from_label("algo inesperado"), InquiryKind::default());
}

// =============================================================
// LeadInquiry
// =============================================================

#[test]
fn lead_record_serializes_with_the_declared_shape() {
    let inquiry = LeadInquiry {
        name: "Clara".to_owned(),
        phone: "(27) 99937-8100".to_owned(),
        email: String::new(),
        interest: InquiryKind::PrivateRetreat,
    };
    let payload = serde_json::to_value(&inquiry).expect("lead record serializes");
    let object = payload.as_object().expect("lead record is a JSON object");
    for key in ["name", "phone", "email", "interest"] {
        assert!(object.contains_key(key), "missing field: {key}");
    }
    assert_eq!(object["name"], "Clara");
}

#[test]
fn default_lead_record_is_empty() {
    let inquiry = LeadInquiry::default();
    assert!(inquiry.name.is_empty());
    assert!(inquiry.phone.is_empty());
    assert!(inquiry.email.is_empty());
    assert_eq!(inquiry.interest, InquiryKind::default());
}
