use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::categories::{BudgetBand, ClaimsVolume, CompanySize, InquiryType, LeadSource, Timeframe};
use super::weights::{
    EngagementBonus, IntentWeights, ScoringProfile, CONTACT_SCORING, LEAD_SCORING, MAX_LEAD_SCORE,
};

/// BANT flags captured while qualifying a lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualificationCriteria {
    pub budget: bool,
    pub authority: bool,
    pub need: bool,
    pub timeline: bool,
}

impl QualificationCriteria {
    pub fn met(&self) -> usize {
        [self.budget, self.authority, self.need, self.timeline]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }
}

/// Categorical snapshot of a contact or lead that the calculator scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringInput {
    pub company_size: Option<CompanySize>,
    pub monthly_claims_volume: Option<ClaimsVolume>,
    pub inquiry_type: Option<InquiryType>,
    pub lead_source: Option<LeadSource>,
    #[serde(alias = "projectTimeframe")]
    pub timeframe: Option<Timeframe>,
    pub budget: Option<BudgetBand>,
    pub interested_services: Vec<String>,
    pub interested_products: Vec<String>,
    pub current_challenges: Vec<String>,
    pub qualification: QualificationCriteria,
}

impl ScoringInput {
    /// Distinct, non-blank services plus distinct, non-blank products. A service and a
    /// product sharing a name are still two interests.
    pub fn interest_count(&self) -> usize {
        distinct_entries(self.interested_services.iter())
            + distinct_entries(self.interested_products.iter())
    }

    pub fn challenge_count(&self) -> usize {
        distinct_entries(self.current_challenges.iter())
    }
}

fn distinct_entries<'a>(entries: impl Iterator<Item = &'a String>) -> usize {
    entries
        .map(|entry| entry.trim().to_ascii_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Sales-readiness score, always within `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadScore(u8);

impl LeadScore {
    pub fn from_raw(raw: f32) -> Self {
        let rounded = raw.max(0.0).round().min(f32::from(MAX_LEAD_SCORE));
        Self(rounded as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LeadScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scored dimension, reported in breakdowns so a score can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFactor {
    CompanySize,
    ClaimsVolume,
    InquiryType,
    LeadSource,
    Timeframe,
    Budget,
    InterestBreadth,
    Qualification,
    Challenges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoringFactor,
    pub points: f32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub profile: String,
    pub components: Vec<ScoreComponent>,
    pub raw_total: f32,
    pub lead_score: LeadScore,
}

/// Stateless scorer applying one weight profile to a [`ScoringInput`].
#[derive(Debug, Clone, Copy)]
pub struct LeadScoreCalculator {
    profile: &'static ScoringProfile,
}

impl LeadScoreCalculator {
    pub fn new(profile: &'static ScoringProfile) -> Self {
        Self { profile }
    }

    pub fn contact() -> Self {
        Self::new(&CONTACT_SCORING)
    }

    pub fn lead() -> Self {
        Self::new(&LEAD_SCORING)
    }

    pub fn profile(&self) -> &'static ScoringProfile {
        self.profile
    }

    pub fn score(&self, input: &ScoringInput) -> LeadScore {
        self.breakdown(input).lead_score
    }

    pub fn breakdown(&self, input: &ScoringInput) -> ScoreBreakdown {
        let profile = self.profile;
        let mut components = Vec::new();

        if let Some(size) = input.company_size {
            push_weight(
                &mut components,
                ScoringFactor::CompanySize,
                profile.company_size.weight(size),
                format!("company size {}", size.label()),
            );
        }

        if let Some(volume) = input.monthly_claims_volume {
            push_weight(
                &mut components,
                ScoringFactor::ClaimsVolume,
                profile.claims_volume.weight(volume),
                format!("monthly claims {}", volume.label()),
            );
        }

        match profile.intent {
            IntentWeights::InquiryType { table, unmapped } => {
                if let Some(inquiry) = input.inquiry_type {
                    let (points, note) = match table.lookup(inquiry) {
                        Some(points) => (points, format!("inquiry {}", inquiry.label())),
                        None => (unmapped, "unmapped inquiry type baseline".to_string()),
                    };
                    push_weight(&mut components, ScoringFactor::InquiryType, points, note);
                }
            }
            IntentWeights::LeadSource(table) => {
                if let Some(source) = input.lead_source {
                    push_weight(
                        &mut components,
                        ScoringFactor::LeadSource,
                        table.weight(source),
                        format!("lead source {}", source.label()),
                    );
                }
            }
        }

        if let Some(timeframe) = input.timeframe {
            push_weight(
                &mut components,
                ScoringFactor::Timeframe,
                profile.timeframe.weight(timeframe),
                format!("timeframe {}", timeframe.label()),
            );
        }

        if let Some(budget) = input.budget.filter(|band| band.is_disclosed()) {
            push_weight(
                &mut components,
                ScoringFactor::Budget,
                profile.budget.weight(budget),
                format!("budget {}", budget.label()),
            );
        }

        match profile.engagement {
            EngagementBonus::InterestBreadth(bonus) => {
                let interests = input.interest_count();
                if interests > 1 {
                    components.push(ScoreComponent {
                        factor: ScoringFactor::InterestBreadth,
                        points: bonus.points(interests),
                        note: format!("{interests} distinct services/products of interest"),
                    });
                }
            }
            EngagementBonus::Qualification(bonus) => {
                let met = input.qualification.met();
                if met > 0 {
                    components.push(ScoreComponent {
                        factor: ScoringFactor::Qualification,
                        points: bonus.points(met),
                        note: format!("{met} of 4 qualification criteria met"),
                    });
                }
            }
        }

        if let Some(bonus) = profile.challenges {
            let challenges = input.challenge_count();
            if challenges > 0 {
                components.push(ScoreComponent {
                    factor: ScoringFactor::Challenges,
                    points: bonus.points(challenges),
                    note: format!("{challenges} current challenge(s) reported"),
                });
            }
        }

        let raw_total: f32 = components.iter().map(|component| component.points).sum();

        ScoreBreakdown {
            profile: profile.name.to_string(),
            components,
            raw_total,
            lead_score: LeadScore::from_raw(raw_total),
        }
    }
}

fn push_weight(
    components: &mut Vec<ScoreComponent>,
    factor: ScoringFactor,
    points: u16,
    note: String,
) {
    if points == 0 {
        return;
    }
    components.push(ScoreComponent {
        factor,
        points: f32::from(points),
        note,
    });
}
