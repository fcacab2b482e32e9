use super::domain::PropertyAsset;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Relocation target applied on top of the monthly rent when a vacancy is re-let.
const VACANCY_RELET_UPLIFT: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Indexation,
    Invoice,
    Vacancy,
    Maintenance,
}

impl CardKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Indexation,
            Self::Invoice,
            Self::Vacancy,
            Self::Maintenance,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Indexation => "Indexation",
            Self::Invoice => "Invoice Approval",
            Self::Vacancy => "Vacancy Alert",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Whether the card amounts recur every month or are a one-off spend.
    pub const fn cadence(self) -> AmountCadence {
        match self {
            Self::Indexation | Self::Vacancy => AmountCadence::Monthly,
            Self::Invoice | Self::Maintenance => AmountCadence::OneOff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountCadence {
    Monthly,
    OneOff,
}

impl AmountCadence {
    pub const fn periods_per_year(self) -> f64 {
        match self {
            Self::Monthly => 12.0,
            Self::OneOff => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Normal,
}

/// One decision the portfolio manager has to take.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefCard {
    pub id: String,
    pub kind: CardKind,
    pub kind_label: &'static str,
    pub asset_id: String,
    pub title: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    pub tags: Vec<String>,
    pub annualized_impact: f64,
}

impl BriefCard {
    fn new(kind: CardKind, id: String, asset: &PropertyAsset, title: String) -> Self {
        Self {
            id,
            kind,
            kind_label: kind.label(),
            asset_id: asset.id.clone(),
            title,
            location: format!("{} · {}", asset.city, asset.address),
            current_amount: None,
            target_amount: None,
            monthly_loss: None,
            urgency: None,
            tags: vec![kind.label().to_string(), asset.city.clone()],
            annualized_impact: 0.0,
        }
    }

    fn with_amounts(mut self, current: Option<f64>, target: Option<f64>) -> Self {
        self.current_amount = current.map(f64::round);
        self.target_amount = target.map(f64::round);
        self.annualized_impact = self.compute_annualized_impact();
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Indexation of the monthly net rental by `uplift` (e.g. 0.045 for +4.5 %).
    pub fn indexation(asset: &PropertyAsset, uplift: f64) -> Self {
        let current = asset.monthly_net_rental();
        Self::new(
            CardKind::Indexation,
            format!("indexation-{}", asset.id),
            asset,
            format!("{} - rent indexation +{:.1} %", asset.address, uplift * 100.0),
        )
        .with_amounts(Some(current), Some(current * (1.0 + uplift)))
    }

    pub fn vacancy(asset: &PropertyAsset) -> Self {
        let current = asset.monthly_net_rental();
        let mut card = Self::new(
            CardKind::Vacancy,
            format!("vacancy-{}", asset.id),
            asset,
            format!("{} - vacancy {:.1} %", asset.address, asset.vacancy_rate),
        )
        .with_amounts(Some(current), Some(current * (1.0 + VACANCY_RELET_UPLIFT)));
        card.monthly_loss = Some(asset.vacancy_rate / 100.0 * current);
        card
    }

    pub fn maintenance(asset: &PropertyAsset, title: impl Into<String>, amount: f64) -> Self {
        Self::new(
            CardKind::Maintenance,
            format!("maintenance-{}", asset.id),
            asset,
            title.into(),
        )
        .with_amounts(Some(amount), None)
    }

    pub fn invoice(asset: &PropertyAsset, title: impl Into<String>, amount: f64) -> Self {
        Self::new(
            CardKind::Invoice,
            format!("invoice-{}", asset.id),
            asset,
            title.into(),
        )
        .with_amounts(Some(amount), None)
    }

    /// Amount the decision is about, before annualisation.
    pub fn headline_amount(&self) -> f64 {
        match (self.kind, self.current_amount, self.target_amount) {
            (CardKind::Vacancy, current, _) => current.unwrap_or(0.0),
            (_, Some(current), Some(target)) if current != 0.0 && target != 0.0 => {
                target - current
            }
            (_, current, _) => current.unwrap_or(0.0),
        }
    }

    fn compute_annualized_impact(&self) -> f64 {
        self.headline_amount() * self.kind.cadence().periods_per_year()
    }
}

/// Declarative description of one card in the morning deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BriefRule {
    Indexation {
        asset_id: String,
        uplift: f64,
        #[serde(default)]
        urgency: Option<Urgency>,
    },
    Vacancy {
        asset_id: String,
    },
    Maintenance {
        asset_id: String,
        title: String,
        amount: f64,
    },
    Invoice {
        asset_id: String,
        title: String,
        amount: f64,
    },
}

impl BriefRule {
    pub fn asset_id(&self) -> &str {
        match self {
            BriefRule::Indexation { asset_id, .. }
            | BriefRule::Vacancy { asset_id }
            | BriefRule::Maintenance { asset_id, .. }
            | BriefRule::Invoice { asset_id, .. } => asset_id,
        }
    }

    fn build(&self, asset: &PropertyAsset) -> BriefCard {
        match self {
            BriefRule::Indexation {
                uplift, urgency, ..
            } => {
                let card = BriefCard::indexation(asset, *uplift);
                match urgency {
                    Some(urgency) => card.with_urgency(*urgency),
                    None => card,
                }
            }
            BriefRule::Vacancy { .. } => BriefCard::vacancy(asset).with_urgency(Urgency::High),
            BriefRule::Maintenance { title, amount, .. } => {
                BriefCard::maintenance(asset, title.clone(), *amount)
            }
            BriefRule::Invoice { title, amount, .. } => {
                BriefCard::invoice(asset, title.clone(), *amount)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefingConfig {
    pub rules: Vec<BriefRule>,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                BriefRule::Indexation {
                    asset_id: "rue-du-mole-5".to_string(),
                    uplift: 0.045,
                    urgency: Some(Urgency::Normal),
                },
                BriefRule::Indexation {
                    asset_id: "avenue-du-censuy-18-26".to_string(),
                    uplift: 0.06,
                    urgency: None,
                },
                BriefRule::Vacancy {
                    asset_id: "rue-du-grand-pre-39".to_string(),
                },
                BriefRule::Maintenance {
                    asset_id: "avenue-victor-ruffy-33".to_string(),
                    title: "Cellar ventilation replacement".to_string(),
                    amount: 18_400.0,
                },
            ],
        }
    }
}

/// Builds the decision deck in rule order, skipping rules whose asset is absent.
pub fn build_brief(assets: &[PropertyAsset], config: &BriefingConfig) -> Vec<BriefCard> {
    config
        .rules
        .iter()
        .filter_map(|rule| {
            let asset = assets.iter().find(|asset| asset.id == rule.asset_id());
            if asset.is_none() {
                warn!(asset = %rule.asset_id(), "brief rule refers to an unknown asset");
            }
            asset.map(|asset| rule.build(asset))
        })
        .collect()
}
