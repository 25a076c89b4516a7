#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use serde::{Deserialize, Serialize};

/// Inquiry categories offered by the contact form select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryKind {
    /// Investing for rental yield.
    #[default]
    Rentability,
    /// A private family retreat.
    PrivateRetreat,
    /// General interest in the project.
    ProjectInfo,
}

impl InquiryKind {
    /// All categories, in the order the select lists them.
    pub const ALL: [Self; 3] = [Self::Rentability, Self::PrivateRetreat, Self::ProjectInfo];

    /// Option label shown in the form select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rentability => "Quero investir em rentabilidade",
            Self::PrivateRetreat => "Quero meu refúgio particular",
            Self::ProjectInfo => "Quero saber mais sobre o projeto",
        }
    }

    /// Resolve a select value back to a category.
    ///
    /// Unknown values fall back to the default option, mirroring the
    /// select element itself.
    #[must_use]
    pub fn from_label(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == value)
            .unwrap_or_default()
    }
}

/// The lead record captured by the contact form.
///
/// This is the structural contract for an eventual lead-intake
/// endpoint; no transport is wired here. `email` is part of the
/// declared shape but the form does not collect it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub interest: InquiryKind,
}
