//! The Five Elements and Yin/Yang energies shared by both pipelines.

use std::fmt;
use std::str::FromStr;

/// One of the Five Elements (Wu Xing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Element {
    /// Growth and vitality.
    Wood,
    /// Light and passion.
    Fire,
    /// Stability and grounding.
    Earth,
    /// Structure and clarity.
    Metal,
    /// Flow and prosperity.
    Water,
}

impl Element {
    /// Every element in canonical order.
    pub const ALL: [Self; 5] = [Self::Wood, Self::Fire, Self::Earth, Self::Metal, Self::Water];

    /// Return the element name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wood" => Ok(Self::Wood),
            "fire" => Ok(Self::Fire),
            "earth" => Ok(Self::Earth),
            "metal" => Ok(Self::Metal),
            "water" => Ok(Self::Water),
            _ => Err(format!("unknown element '{s}'")),
        }
    }
}

/// Symbolic polarity of an item or place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Energy {
    /// Calm, passive.
    Yin,
    /// Active, bright.
    Yang,
    /// Neither; tallied as yin by the indoor scorer.
    Neutral,
}

impl Energy {
    /// Return the energy name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yin => "yin",
            Self::Yang => "yang",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element scores for a location plus their mean.
///
/// `overall_score` is the unweighted mean of the five element scores, so it
/// always lies between the weakest and strongest element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FiveElements {
    /// Wood score.
    pub wood: f64,
    /// Fire score.
    pub fire: f64,
    /// Earth score.
    pub earth: f64,
    /// Metal score.
    pub metal: f64,
    /// Water score.
    pub water: f64,
    /// Mean of the five element scores.
    pub overall_score: f64,
}

impl FiveElements {
    /// Build from per-element scores, sanitising each and deriving the mean.
    ///
    /// # Examples
    /// ```
    /// use fengshui_core::FiveElements;
    ///
    /// let elements = FiveElements::from_scores(80.0, 70.0, 70.0, 70.0, 60.0);
    /// assert_eq!(elements.overall_score, 70.0);
    /// ```
    #[must_use]
    pub fn from_scores(wood: f64, fire: f64, earth: f64, metal: f64, water: f64) -> Self {
        let scores = [wood, fire, earth, metal, water].map(crate::sanitise_score);
        let [wood, fire, earth, metal, water] = scores;
        let overall_score = scores.iter().sum::<f64>() / 5.0;
        Self {
            wood,
            fire,
            earth,
            metal,
            water,
            overall_score,
        }
    }

    /// Return the score for a single element.
    #[must_use]
    pub const fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Apply `f` to every score, including the mean.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            wood: f(self.wood),
            fire: f(self.fire),
            earth: f(self.earth),
            metal: f(self.metal),
            water: f(self.water),
            overall_score: f(self.overall_score),
        }
    }
}

/// Tally of items per element; all five keys are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementCounts {
    /// Wood items.
    pub wood: u32,
    /// Fire items.
    pub fire: u32,
    /// Earth items.
    pub earth: u32,
    /// Metal items.
    pub metal: u32,
    /// Water items.
    pub water: u32,
}

impl ElementCounts {
    /// Return the count for `element`.
    #[must_use]
    pub const fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Increment the count for `element`.
    pub const fn add(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot = slot.saturating_add(1);
    }

    /// Total number of tallied items.
    #[must_use]
    pub fn total(&self) -> u32 {
        Element::ALL.iter().map(|element| self.get(*element)).sum()
    }
}

impl FromIterator<Element> for ElementCounts {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut counts = Self::default();
        for element in iter {
            counts.add(element);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parsing_is_case_insensitive() {
        assert_eq!("Water".parse::<Element>(), Ok(Element::Water));
        assert!("aether".parse::<Element>().is_err());
    }

    #[rstest]
    fn mean_lies_between_extremes() {
        let elements = FiveElements::from_scores(10.0, 90.0, 40.0, 55.0, 100.0);
        assert!(elements.overall_score >= 10.0);
        assert!(elements.overall_score <= 100.0);
        assert!((elements.overall_score - 59.0).abs() < 1e-9);
    }

    #[rstest]
    fn element_scores_are_sanitised() {
        let elements = FiveElements::from_scores(f64::NAN, 150.0, -2.0, 50.0, 50.0);
        assert_eq!(elements.wood, 0.0);
        assert_eq!(elements.fire, 100.0);
        assert_eq!(elements.earth, 0.0);
    }

    #[rstest]
    fn counts_tally_every_element() {
        let counts: ElementCounts = [Element::Fire, Element::Fire, Element::Water]
            .into_iter()
            .collect();
        assert_eq!(counts.fire, 2);
        assert_eq!(counts.water, 1);
        assert_eq!(counts.wood, 0);
        assert_eq!(counts.total(), 3);
    }
}
