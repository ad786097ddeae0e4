use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CaseInformation, PartyRole};

/// A date found in a document, with enough provenance to place it on the
/// consolidated timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateFact {
    pub date: NaiveDate,
    /// The text that matched, verbatim.
    pub raw_text: String,
    pub context: EventContext,
    /// Format-dependent: unambiguous formats score higher.
    pub confidence: f32,
    /// 1-based line number in the source text.
    pub source_line: usize,
}

/// What a date refers to, classified from surrounding keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventContext {
    Denial,
    Dispute,
    Filing,
    Response,
    Investigation,
    Service,
    Judgment,
    Generic,
}

impl EventContext {
    /// Human-readable label used in timeline entries.
    pub fn label(&self) -> &'static str {
        match self {
            EventContext::Denial => "Denial or adverse action",
            EventContext::Dispute => "Dispute",
            EventContext::Filing => "Filing",
            EventContext::Response => "Response",
            EventContext::Investigation => "Investigation",
            EventContext::Service => "Service of process",
            EventContext::Judgment => "Judgment or order",
            EventContext::Generic => "Date referenced",
        }
    }
}

/// An attorney block extracted from a signature or letterhead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttorneyRecord {
    pub name: Option<String>,
    pub firm: Option<String>,
    pub bar_number: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl AttorneyRecord {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.firm.is_none()
            && self.bar_number.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// Category-keyed entity mentions from one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalEntities {
    pub financial_institutions: Vec<String>,
    pub credit_bureaus: Vec<String>,
    pub attorneys: Vec<AttorneyRecord>,
    /// Statutory citations like "15 U.S.C. § 1681".
    pub statutes: Vec<String>,
}

impl LegalEntities {
    /// Flat category → names view, used by downstream consumers that treat
    /// entities as an opaque mapping.
    pub fn as_map(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut map = BTreeMap::new();
        map.insert("financial_institutions", self.financial_institutions.clone());
        map.insert("credit_bureaus", self.credit_bureaus.clone());
        map.insert(
            "attorneys",
            self.attorneys
                .iter()
                .filter_map(|a| a.name.clone())
                .collect(),
        );
        map.insert("statutes", self.statutes.clone());
        map
    }
}

/// A party name extracted from one document, before consolidation tags it
/// with its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedParty {
    pub name: String,
    pub role: PartyRole,
    pub confidence: f32,
}

/// The fact bag: everything extracted from a single document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFacts {
    pub case_information: CaseInformation,
    pub parties: Vec<ExtractedParty>,
    pub dates: Vec<DateFact>,
    pub entities: LegalEntities,
    /// Confidence of the text this bag was extracted from (engine-reported).
    pub confidence: f32,
}
