//! Relation-type labels: every label seen in the concept dataset, plus a
//! catch-all for labels added to the data later.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! relation_types {
    ($($variant:ident => $label:literal),+ $(,)?) => {
        /// A relation-type label. Unrecognized labels are kept verbatim in
        /// [`RelationType::Other`] so data never fails to load.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum RelationType {
            $($variant,)+
            Other(String),
        }

        static KNOWN_LABELS: &[&str] = &[$($label),+];

        impl RelationType {
            /// The label as it appears in the dataset.
            pub fn as_str(&self) -> &str {
                match self {
                    $(RelationType::$variant => $label,)+
                    RelationType::Other(label) => label,
                }
            }

            /// Parse a dataset label; never fails.
            pub fn from_label(label: &str) -> Self {
                match label {
                    $($label => RelationType::$variant,)+
                    other => RelationType::Other(other.to_string()),
                }
            }
        }
    };
}

relation_types! {
    // Genealogical
    InfluencedBy => "influenced_by",
    Influenced => "influenced",
    EvolvedFrom => "evolved_from",
    EvolvedInto => "evolved_into",
    EmergedFrom => "emerged_from",
    GaveRiseTo => "gave_rise_to",
    FoundedOn => "founded_on",
    FoundationFor => "foundation_for",
    FoundedBy => "founded_by",
    Founded => "founded",
    FoundationOf => "foundation_of",
    HadFoundationIn => "had_foundation_in",
    BuiltOn => "built_on",
    ProvidedFoundationFor => "provided_foundation_for",
    BasedOn => "based_on",
    ProvidesBasisFor => "provides_basis_for",
    DerivedFrom => "derived_from",
    DerivedInto => "derived_into",
    Developed => "developed",
    DevelopedFrom => "developed_from",
    LedTo => "led_to",
    WasLedFrom => "was_led_from",
    Preceded => "preceded",
    Succeeded => "succeeded",
    Anticipated => "anticipated",
    WasAnticipatedBy => "was_anticipated_by",
    PreservedAndDeveloped => "preserved_and_developed",
    WasPreservedBy => "was_preserved_by",
    // Ideological
    Opposes => "opposes",
    OpposedBy => "opposed_by",
    Critiques => "critiques",
    CritiquedBy => "critiqued_by",
    Critiqued => "critiqued",
    WasCritiquedBy => "was_critiqued_by",
    Challenges => "challenges",
    ChallengedBy => "challenged_by",
    Challenged => "challenged",
    WasChallengedBy => "was_challenged_by",
    ReactsAgainst => "reacts_against",
    ProvokedReactionIn => "provoked_reaction_in",
    ReactedAgainst => "reacted_against",
    Provoked => "provoked",
    RespondedToBy => "responded_to_by",
    RespondsTo => "responds_to",
    Rejects => "rejects",
    RejectedBy => "rejected_by",
    ContrastsWith => "contrasts_with",
    ConflictsWith => "conflicts_with",
    TensionsWith => "tensions_with",
    SkepticalOf => "skeptical_of",
    ViewedSkepticallyBy => "viewed_skeptically_by",
    // Forms and variants
    FormOf => "form_of",
    HasForm => "has_form",
    EarlyForm => "early_form",
    LaterBecame => "later_became",
    RadicalForm => "radical_form",
    HasRadicalVersion => "has_radical_version",
    ModerateForm => "moderate_form",
    HasModerateVersion => "has_moderate_version",
    ExtremeForm => "extreme_form",
    HasExtremeVersion => "has_extreme_version",
    ModernForm => "modern_form",
    HasModernVersion => "has_modern_version",
    VariantOf => "variant_of",
    HasVariant => "has_variant",
    RevivalOf => "revival_of",
    WasRevivedAs => "was_revived_as",
    DivergedFrom => "diverged_from",
    SplitInto => "split_into",
    RadicalizedInto => "radicalized_into",
    ModerateVersionWas => "moderate_version_was",
    // Synthesis
    SynthesizedWith => "synthesized_with",
    SynthesizesWith => "synthesizes_with",
    IntegratedInto => "integrated_into",
    Integrated => "integrated",
    IncorporatedInto => "incorporated_into",
    Incorporated => "incorporated",
    // Similarity
    SimilarTo => "similar_to",
    RelatedTo => "related_to",
    CloselyRelated => "closely_related",
    LinkedTo => "linked_to",
    AssociatedWith => "associated_with",
    Intersects => "intersects",
    AlignedWith => "aligned_with",
    OftenAligned => "often_aligned",
    OftenCombined => "often_combined",
    DistinctFrom => "distinct_from",
    BothOpposesAndPromotes => "both_opposes_and_promotes",
    Parallels => "parallels",
    ResonatesWith => "resonates_with",
    // Illustration and application
    Exemplifies => "exemplifies",
    ExemplifiedBy => "exemplified_by",
    Includes => "includes",
    IncludedIn => "included_in",
    Applies => "applies",
    AppliedBy => "applied_by",
    AppliedAs => "applied_as",
    WasAppliedBy => "was_applied_by",
    Extends => "extends",
    ExtendedBy => "extended_by",
    Employs => "employs",
    EmployedBy => "employed_by",
    PartOf => "part_of",
    HasPart => "has_part",
    CentralTo => "central_to",
    HasCentralElement => "has_central_element",
    // Advocacy
    Promotes => "promotes",
    PromotedBy => "promoted_by",
    Promoted => "promoted",
    WasPromotedBy => "was_promoted_by",
    ChampionedBy => "championed_by",
    Championed => "championed",
    StronglySupports => "strongly_supports",
    StronglySupportedBy => "strongly_supported_by",
    Justifies => "justifies",
    JustifiedBy => "justified_by",
    // Other
    Inverted => "inverted",
    WasInvertedBy => "was_inverted_by",
    Regulates => "regulates",
    RegulatedBy => "regulated_by",
    ClaimedToRepresent => "claimed_to_represent",
    ClaimedAsRepresentationBy => "claimed_as_representation_by",
    AccusedOf => "accused_of",
    AccusedBy => "accused_by",
}

macro_rules! reverse_pairs {
    ($($a:ident <=> $b:ident),+ $(,)?) => {
        fn paired_reverse(kind: &RelationType) -> Option<RelationType> {
            match kind {
                $(
                    RelationType::$a => Some(RelationType::$b),
                    RelationType::$b => Some(RelationType::$a),
                )+
                _ => None,
            }
        }
    };
}

// Labels absent here are symmetric (contrasts_with, similar_to, ...) or
// unknown, and reverse to themselves.
reverse_pairs! {
    InfluencedBy <=> Influenced,
    EvolvedFrom <=> EvolvedInto,
    EmergedFrom <=> GaveRiseTo,
    FoundedOn <=> FoundationFor,
    FoundedBy <=> Founded,
    FoundationOf <=> HadFoundationIn,
    BuiltOn <=> ProvidedFoundationFor,
    BasedOn <=> ProvidesBasisFor,
    DerivedFrom <=> DerivedInto,
    Developed <=> DevelopedFrom,
    LedTo <=> WasLedFrom,
    Preceded <=> Succeeded,
    Anticipated <=> WasAnticipatedBy,
    PreservedAndDeveloped <=> WasPreservedBy,
    Opposes <=> OpposedBy,
    Critiques <=> CritiquedBy,
    Critiqued <=> WasCritiquedBy,
    Challenges <=> ChallengedBy,
    Challenged <=> WasChallengedBy,
    ReactsAgainst <=> ProvokedReactionIn,
    ReactedAgainst <=> Provoked,
    RespondedToBy <=> RespondsTo,
    Rejects <=> RejectedBy,
    SkepticalOf <=> ViewedSkepticallyBy,
    FormOf <=> HasForm,
    EarlyForm <=> LaterBecame,
    RadicalForm <=> HasRadicalVersion,
    ModerateForm <=> HasModerateVersion,
    ExtremeForm <=> HasExtremeVersion,
    ModernForm <=> HasModernVersion,
    VariantOf <=> HasVariant,
    RevivalOf <=> WasRevivedAs,
    DivergedFrom <=> SplitInto,
    RadicalizedInto <=> ModerateVersionWas,
    IntegratedInto <=> Integrated,
    IncorporatedInto <=> Incorporated,
    Exemplifies <=> ExemplifiedBy,
    Includes <=> IncludedIn,
    Applies <=> AppliedBy,
    AppliedAs <=> WasAppliedBy,
    Extends <=> ExtendedBy,
    Employs <=> EmployedBy,
    PartOf <=> HasPart,
    CentralTo <=> HasCentralElement,
    Promotes <=> PromotedBy,
    Promoted <=> WasPromotedBy,
    ChampionedBy <=> Championed,
    StronglySupports <=> StronglySupportedBy,
    Justifies <=> JustifiedBy,
    Inverted <=> WasInvertedBy,
    Regulates <=> RegulatedBy,
    ClaimedToRepresent <=> ClaimedAsRepresentationBy,
    AccusedOf <=> AccusedBy,
}

impl RelationType {
    /// Canonical reverse label; symmetric and unknown labels map to themselves.
    pub fn reverse(&self) -> RelationType {
        paired_reverse(self).unwrap_or_else(|| self.clone())
    }

    /// True when the label is not one of the known dataset labels.
    pub fn is_unknown(&self) -> bool {
        matches!(self, RelationType::Other(_))
    }

    /// Every known label, in declaration order.
    pub fn known() -> impl Iterator<Item = RelationType> {
        KNOWN_LABELS.iter().map(|label| RelationType::from_label(label))
    }
}

impl From<String> for RelationType {
    fn from(label: String) -> Self {
        match RelationType::from_label(&label) {
            RelationType::Other(_) => RelationType::Other(label),
            known => known,
        }
    }
}

impl From<&str> for RelationType {
    fn from(label: &str) -> Self {
        RelationType::from_label(label)
    }
}

impl From<RelationType> for String {
    fn from(kind: RelationType) -> Self {
        match kind {
            RelationType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RelationType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RelationType::from_label(s))
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for kind in RelationType::known() {
            assert!(!kind.is_unknown(), "{} parsed as unknown", kind);
            assert_eq!(RelationType::from_label(kind.as_str()), kind);
        }
    }

    #[test]
    fn known_labels_are_unique() {
        let mut labels: Vec<&str> = KNOWN_LABELS.to_vec();
        labels.sort_unstable();
        let before = labels.len();
        labels.dedup();
        assert_eq!(before, labels.len());
    }

    #[test]
    fn unknown_label_is_preserved() {
        let kind = RelationType::from_label("inspired_by");
        assert_eq!(kind, RelationType::Other("inspired_by".to_string()));
        assert!(kind.is_unknown());
        assert_eq!(kind.as_str(), "inspired_by");
    }

    #[test]
    fn reverse_pairs_are_involutions() {
        for kind in RelationType::known() {
            assert_eq!(kind.reverse().reverse(), kind, "reverse of {} is not an involution", kind);
        }
    }

    #[test]
    fn reverse_of_paired_and_symmetric_labels() {
        assert_eq!(RelationType::InfluencedBy.reverse(), RelationType::Influenced);
        assert_eq!(RelationType::EmergedFrom.reverse(), RelationType::GaveRiseTo);
        assert_eq!(RelationType::SimilarTo.reverse(), RelationType::SimilarTo);
        assert_eq!(RelationType::ContrastsWith.reverse(), RelationType::ContrastsWith);
        let unknown = RelationType::from_label("inspired_by");
        assert_eq!(unknown.reverse(), unknown);
    }

    #[test]
    fn serde_uses_raw_label() {
        let json = serde_json::to_string(&RelationType::EvolvedInto).unwrap();
        assert_eq!(json, "\"evolved_into\"");
        let parsed: RelationType = serde_json::from_str("\"opposes\"").unwrap();
        assert_eq!(parsed, RelationType::Opposes);
        let other: RelationType = serde_json::from_str("\"mirrors\"").unwrap();
        assert_eq!(other, RelationType::Other("mirrors".to_string()));
    }
}
