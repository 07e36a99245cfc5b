use super::categories::{BudgetBand, ClaimsVolume, CompanySize, InquiryType, LeadSource, Timeframe};

/// Immutable category → points lookup. Keys missing from the table score zero.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable<K: 'static> {
    entries: &'static [(K, u16)],
}

impl<K: Copy + PartialEq> WeightTable<K> {
    pub const fn new(entries: &'static [(K, u16)]) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, key: K) -> Option<u16> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, weight)| *weight)
    }

    pub fn weight(&self, key: K) -> u16 {
        self.lookup(key).unwrap_or(0)
    }
}

/// A per-item bonus that stops growing at `cap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedBonus {
    pub per_item: f32,
    pub cap: f32,
}

impl CappedBonus {
    pub fn points(&self, count: usize) -> f32 {
        (count as f32 * self.per_item).min(self.cap)
    }
}

/// Which intent field a profile scores, and how unmapped values are treated.
#[derive(Debug, Clone, Copy)]
pub enum IntentWeights {
    InquiryType {
        table: WeightTable<InquiryType>,
        unmapped: u16,
    },
    LeadSource(WeightTable<LeadSource>),
}

/// Bonus rewarding how engaged the prospect already is.
#[derive(Debug, Clone, Copy)]
pub enum EngagementBonus {
    /// Applies only when more than one distinct service or product was selected.
    InterestBreadth(CappedBonus),
    /// Applies per BANT qualification criterion met.
    Qualification(CappedBonus),
}

/// Complete weight configuration consumed by the lead score calculator.
#[derive(Debug, Clone, Copy)]
pub struct ScoringProfile {
    pub name: &'static str,
    pub company_size: WeightTable<CompanySize>,
    pub claims_volume: WeightTable<ClaimsVolume>,
    pub intent: IntentWeights,
    pub timeframe: WeightTable<Timeframe>,
    pub budget: WeightTable<BudgetBand>,
    pub engagement: EngagementBonus,
    pub challenges: Option<CappedBonus>,
}

impl ScoringProfile {
    pub fn by_name(name: &str) -> Option<&'static ScoringProfile> {
        PROFILES
            .iter()
            .copied()
            .find(|profile| profile.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PROFILES.iter().map(|profile| profile.name)
    }
}

pub const MAX_LEAD_SCORE: u8 = 100;

pub static CONTACT_SCORING: ScoringProfile = ScoringProfile {
    name: "contact-scoring",
    company_size: WeightTable::new(&[
        (CompanySize::OneToTen, 10),
        (CompanySize::ElevenToFifty, 20),
        (CompanySize::FiftyOneToTwoHundred, 30),
        (CompanySize::TwoHundredOneToFiveHundred, 40),
        (CompanySize::OverFiveHundred, 50),
    ]),
    claims_volume: WeightTable::new(&[
        (ClaimsVolume::UnderOneThousand, 10),
        (ClaimsVolume::OneToFiveThousand, 20),
        (ClaimsVolume::FiveToTenThousand, 25),
        (ClaimsVolume::TenToTwentyFiveThousand, 30),
        (ClaimsVolume::TwentyFiveToFiftyThousand, 40),
        (ClaimsVolume::OverFiftyThousand, 45),
    ]),
    intent: IntentWeights::InquiryType {
        table: WeightTable::new(&[
            (InquiryType::PricingRequest, 30),
            (InquiryType::DemoRequest, 25),
            (InquiryType::Consultation, 20),
            (InquiryType::Partnership, 15),
            (InquiryType::GeneralInquiry, 5),
            (InquiryType::Support, 2),
        ]),
        unmapped: 10,
    },
    timeframe: WeightTable::new(&[
        (Timeframe::Immediate, 30),
        (Timeframe::OneToThreeMonths, 20),
        (Timeframe::ThreeToSixMonths, 15),
        (Timeframe::SixToTwelveMonths, 10),
        (Timeframe::PlanningStage, 5),
    ]),
    budget: WeightTable::new(&[
        (BudgetBand::UnderTenThousand, 5),
        (BudgetBand::TenToFiftyThousand, 10),
        (BudgetBand::FiftyToHundredThousand, 15),
        (BudgetBand::HundredToFiveHundredThousand, 20),
        (BudgetBand::OverFiveHundredThousand, 25),
    ]),
    engagement: EngagementBonus::InterestBreadth(CappedBonus {
        per_item: 5.0,
        cap: 15.0,
    }),
    challenges: None,
};

pub static LEAD_SCORING: ScoringProfile = ScoringProfile {
    name: "lead-scoring",
    company_size: WeightTable::new(&[
        (CompanySize::OneToTen, 5),
        (CompanySize::ElevenToFifty, 10),
        (CompanySize::FiftyOneToTwoHundred, 15),
        (CompanySize::TwoHundredOneToFiveHundred, 20),
        (CompanySize::OverFiveHundred, 25),
    ]),
    claims_volume: WeightTable::new(&[
        (ClaimsVolume::UnderOneThousand, 5),
        (ClaimsVolume::OneToFiveThousand, 10),
        (ClaimsVolume::FiveToTenThousand, 15),
        (ClaimsVolume::TenToTwentyFiveThousand, 20),
        (ClaimsVolume::TwentyFiveToFiftyThousand, 25),
        (ClaimsVolume::OverFiftyThousand, 30),
    ]),
    intent: IntentWeights::LeadSource(WeightTable::new(&[
        (LeadSource::Referral, 20),
        (LeadSource::PricingCalculator, 18),
        (LeadSource::Website, 15),
        (LeadSource::TradeShow, 14),
        (LeadSource::Webinar, 12),
        (LeadSource::EmailCampaign, 8),
        (LeadSource::SocialMedia, 6),
        (LeadSource::ColdOutreach, 4),
    ])),
    timeframe: WeightTable::new(&[
        (Timeframe::Immediate, 20),
        (Timeframe::OneToThreeMonths, 15),
        (Timeframe::ThreeToSixMonths, 10),
        (Timeframe::SixToTwelveMonths, 5),
        (Timeframe::PlanningStage, 2),
    ]),
    budget: WeightTable::new(&[
        (BudgetBand::UnderTenThousand, 5),
        (BudgetBand::TenToFiftyThousand, 10),
        (BudgetBand::FiftyToHundredThousand, 15),
        (BudgetBand::HundredToFiveHundredThousand, 20),
        (BudgetBand::OverFiveHundredThousand, 25),
    ]),
    engagement: EngagementBonus::Qualification(CappedBonus {
        per_item: 2.5,
        cap: 10.0,
    }),
    challenges: Some(CappedBonus {
        per_item: 2.0,
        cap: 5.0,
    }),
};

static PROFILES: [&ScoringProfile; 2] = [&CONTACT_SCORING, &LEAD_SCORING];

#[cfg(test)]
mod tests {
    use super::*;

    fn non_decreasing(weights: &[u16]) -> bool {
        weights.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[test]
    fn company_size_weights_never_drop_with_band() {
        for profile in PROFILES {
            let weights: Vec<u16> = CompanySize::KNOWN
                .iter()
                .map(|size| profile.company_size.weight(*size))
                .collect();
            assert!(non_decreasing(&weights), "{}: {weights:?}", profile.name);
        }
    }

    #[test]
    fn claims_volume_weights_never_drop_with_band() {
        for profile in PROFILES {
            let weights: Vec<u16> = ClaimsVolume::KNOWN
                .iter()
                .map(|volume| profile.claims_volume.weight(*volume))
                .collect();
            assert!(non_decreasing(&weights), "{}: {weights:?}", profile.name);
        }
    }

    #[test]
    fn budget_tables_omit_not_disclosed() {
        for profile in PROFILES {
            assert_eq!(profile.budget.lookup(BudgetBand::NotDisclosed), None);
        }
    }

    #[test]
    fn profiles_resolve_by_name() {
        assert_eq!(
            ScoringProfile::by_name("Lead-Scoring").map(|profile| profile.name),
            Some("lead-scoring")
        );
        assert!(ScoringProfile::by_name("partner-scoring").is_none());
        assert_eq!(
            ScoringProfile::names().collect::<Vec<_>>(),
            vec!["contact-scoring", "lead-scoring"]
        );
    }

    #[test]
    fn capped_bonus_stops_at_cap() {
        let bonus = CappedBonus {
            per_item: 2.0,
            cap: 5.0,
        };
        assert_eq!(bonus.points(0), 0.0);
        assert_eq!(bonus.points(2), 4.0);
        assert_eq!(bonus.points(7), 5.0);
    }
}
