//! Explanation and suggestion text for an outdoor analysis.
//!
//! Both lists follow a fixed priority order: the seven categories, then
//! Yin-Yang balance, Five Elements harmony and Qi flow. Output depends only on
//! the scores passed in.

use fengshui_core::{Category, Energy, FeatureVector, Prediction};

use crate::TraditionalScores;

const HIGH_SCORE: f64 = 80.0;
const LOW_SCORE: f64 = 40.0;
const GOOD_OVERALL: f64 = 60.0;
const REMARKED_FEATURES: usize = 3;

/// A scored aspect of a location, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// One of the seven traditional categories.
    Category(Category),
    /// Yin-Yang balance.
    YinYang,
    /// Five Elements harmony.
    FiveElements,
    /// Qi flow.
    QiFlow,
}

impl Dimension {
    /// Every dimension in priority order.
    pub const ALL: [Self; 10] = [
        Self::Category(Category::GreenSpace),
        Self::Category(Category::WaterElement),
        Self::Category(Category::BuildingHarmony),
        Self::Category(Category::RoadAccessibility),
        Self::Category(Category::Orientation),
        Self::Category(Category::EnvironmentalQuality),
        Self::Category(Category::SpiritualEnergy),
        Self::YinYang,
        Self::FiveElements,
        Self::QiFlow,
    ];

    /// Display label used at the start of remarks.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category(Category::GreenSpace) => "Green space",
            Self::Category(Category::WaterElement) => "Water element",
            Self::Category(Category::BuildingHarmony) => "Building harmony",
            Self::Category(Category::RoadAccessibility) => "Road accessibility",
            Self::Category(Category::Orientation) => "Orientation",
            Self::Category(Category::EnvironmentalQuality) => "Environmental quality",
            Self::Category(Category::SpiritualEnergy) => "Spiritual energy",
            Self::YinYang => "Yin-Yang balance",
            Self::FiveElements => "Five Elements harmony",
            Self::QiFlow => "Qi flow",
        }
    }

    /// Score of this dimension in `scores`.
    #[must_use]
    pub const fn score(self, scores: &TraditionalScores) -> f64 {
        match self {
            Self::Category(category) => scores.categories.get(category),
            Self::YinYang => scores.yin_yang_balance,
            Self::FiveElements => scores.five_elements.overall_score,
            Self::QiFlow => scores.qi_flow,
        }
    }

    const fn high_remark(self) -> &'static str {
        match self {
            Self::Category(Category::GreenSpace) => {
                "abundant greenery nourishes Wood energy and vitality."
            }
            Self::Category(Category::WaterElement) => {
                "nearby water supports prosperity and the flow of Qi."
            }
            Self::Category(Category::BuildingHarmony) => {
                "open surroundings let energy circulate freely."
            }
            Self::Category(Category::RoadAccessibility) => {
                "well-connected streets bring steady, balanced movement."
            }
            Self::Category(Category::Orientation) => {
                "nearby buildings favour the auspicious southern aspect."
            }
            Self::Category(Category::EnvironmentalQuality) => {
                "healthcare and education are within comfortable reach."
            }
            Self::Category(Category::SpiritualEnergy) => {
                "spiritual sites nearby lend calm, protective energy."
            }
            Self::YinYang => "calm and active energies are in balance.",
            Self::FiveElements => "the Five Elements support one another.",
            Self::QiFlow => "energy circulates smoothly through the area.",
        }
    }

    const fn low_remark(self) -> &'static str {
        match self {
            Self::Category(Category::GreenSpace) => {
                "little greenery nearby limits natural vitality."
            }
            Self::Category(Category::WaterElement) => {
                "distant or absent water weakens prosperity energy."
            }
            Self::Category(Category::BuildingHarmony) => {
                "dense construction crowds the flow of energy."
            }
            Self::Category(Category::RoadAccessibility) => {
                "roads are sparse or congested, which disturbs circulation."
            }
            Self::Category(Category::Orientation) => {
                "few buildings face the favourable southern direction."
            }
            Self::Category(Category::EnvironmentalQuality) => {
                "access to healthcare and education is limited."
            }
            Self::Category(Category::SpiritualEnergy) => "no spiritual sites are close by.",
            Self::YinYang => "calm and active energies are out of balance.",
            Self::FiveElements => "the Five Elements are unevenly represented.",
            Self::QiFlow => "energy stagnates or rushes through the area.",
        }
    }

    /// Score below which this dimension earns a suggestion.
    const fn suggestion_threshold(self) -> f64 {
        match self {
            Self::Category(Category::RoadAccessibility) => 40.0,
            Self::Category(Category::SpiritualEnergy) => 30.0,
            Self::YinYang => 70.0,
            Self::FiveElements | Self::QiFlow => 60.0,
            Self::Category(_) => 50.0,
        }
    }

    fn suggestion(self, dominant_energy: Option<Energy>) -> &'static str {
        match self {
            Self::Category(Category::GreenSpace) => {
                "Add plants, trees or a garden, or choose a site closer to a park, to strengthen Wood energy."
            }
            Self::Category(Category::WaterElement) => {
                "Introduce a water feature such as a fountain or pond to invite prosperity."
            }
            Self::Category(Category::BuildingHarmony) => {
                "Create open space around the building to relieve crowding and let energy circulate."
            }
            Self::Category(Category::RoadAccessibility) => {
                "Favour sites with moderate, well-connected streets over isolated or congested ones."
            }
            Self::Category(Category::Orientation) => {
                "Favour south-facing entrances and windows to capture auspicious light."
            }
            Self::Category(Category::EnvironmentalQuality) => {
                "Consider proximity to hospitals and schools to support health and learning."
            }
            Self::Category(Category::SpiritualEnergy) => {
                "Create a quiet corner for reflection, or visit a nearby temple or shrine."
            }
            Self::YinYang => match dominant_energy {
                Some(Energy::Yang) => {
                    "Too much Yang energy: soften the space with plants, water and quiet areas."
                }
                Some(Energy::Yin) => {
                    "Too much Yin energy: brighten the space with light, activity and warm colours."
                }
                _ => "Balance calm and active elements by pairing greenery and water with light and activity.",
            },
            Self::FiveElements => {
                "Strengthen the weaker elements through colour, material and shape to balance the Five Elements."
            }
            Self::QiFlow => {
                "Improve Qi flow by clearing clutter and opening pathways for energy to move."
            }
        }
    }
}

/// Quality word for a unit feature value.
fn quality(value: f64) -> &'static str {
    if value > 0.7 {
        "excellent"
    } else if value > 0.5 {
        "good"
    } else if value > 0.3 {
        "moderate"
    } else {
        "low"
    }
}

/// Explain a final score and its strongest and weakest contributors.
///
/// The first entry always summarises `final_score`. When a prediction is
/// present, the three most influential features close the list.
#[must_use]
pub fn explanations(
    final_score: f64,
    scores: &TraditionalScores,
    features: &FeatureVector,
    prediction: Option<&Prediction>,
) -> Vec<String> {
    let mut lines = vec![overall_sentence(final_score)];
    lines.extend(Dimension::ALL.into_iter().filter_map(|dimension| {
        let score = dimension.score(scores);
        let remark = if score >= HIGH_SCORE {
            format!("{} is strong ({score:.0}/100): {}", dimension.label(), dimension.high_remark())
        } else if score < LOW_SCORE {
            format!("{} is weak ({score:.0}/100): {}", dimension.label(), dimension.low_remark())
        } else {
            return None;
        };
        Some(remark)
    }));
    if let Some(found) = prediction {
        lines.extend(
            found
                .importances
                .ranked()
                .into_iter()
                .take(REMARKED_FEATURES)
                .map(|(feature, importance)| {
                    format!(
                        "Statistical model: {} is a key factor ({:.0}% influence) and is {} here.",
                        feature.label(),
                        percentage(importance),
                        quality(features.get(feature)),
                    )
                }),
        );
    }
    lines
}

/// Suggest improvements for every deficient dimension.
///
/// Never empty: when nothing is deficient a single maintenance message is
/// returned.
#[must_use]
pub fn suggestions(scores: &TraditionalScores) -> Vec<String> {
    let found: Vec<String> = Dimension::ALL
        .into_iter()
        .filter(|dimension| dimension.score(scores) < dimension.suggestion_threshold())
        .map(|dimension| dimension.suggestion(scores.dominant_energy).to_owned())
        .collect();
    if found.is_empty() {
        vec![
            "This location is well balanced; maintain its greenery, water and open space to preserve the harmony."
                .to_owned(),
        ]
    } else {
        found
    }
}

fn overall_sentence(final_score: f64) -> String {
    if final_score >= HIGH_SCORE {
        format!(
            "Excellent Feng Shui ({final_score:.1}/100): natural and built surroundings are in strong harmony."
        )
    } else if final_score >= GOOD_OVERALL {
        format!("Good Feng Shui ({final_score:.1}/100): the energy of this location is generally positive.")
    } else if final_score >= LOW_SCORE {
        format!(
            "Average Feng Shui ({final_score:.1}/100): some aspects support harmony while others need attention."
        )
    } else {
        format!(
            "Challenging Feng Shui ({final_score:.1}/100): several aspects disrupt the flow of energy."
        )
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "importances are reported as percentages"
)]
fn percentage(importance: f64) -> f64 {
    importance * 100.0
}
