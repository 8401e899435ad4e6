//! This module classifies a color into a [`Family`]: a coarse family such as "Blue" and a shade
//! within it such as "Navy". Classification is a pure decision tree over the rounded HSL value of
//! the color, in three stages:
//!
//! 1. **Neutrals.** Low-saturation colors are Black, White, or Gray with a lightness-derived tone.
//! 2. **Browns.** Muted, mid-lightness colors in the red-orange hue range are Brown.
//! 3. **Hue bands.** Everything else falls into one of a set of contiguous bands partitioning the
//!    hue circle, each of which picks a shade from its own ordered list of rules.
//!
//! All of the thresholds and names live in a [`FamilyTable`], which is plain data: it can be loaded
//! from JSON and validated, so the boundaries between, say, Red and Pink are configuration rather
//! than code. [`FamilyTable::default`] is the reference table, with Pink and Aqua/Teal as families of
//! their own and Black and White as separate families.

use std::collections::BTreeSet;
use std::path::Path;

use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{Color, ColorSpace};
use crate::colors::{HSLColor, RGBColor};
use crate::csscolor::parse_color;
use crate::error::{ColorError, Result};
use crate::family::{Family, UNKNOWN_FAMILY};

lazy_static! {
    static ref DEFAULT_CLASSIFIER: FamilyClassifier = FamilyClassifier {
        table: FamilyTable::default(),
    };
}

/// An arc of the hue circle, `[start, end)` in degrees. If `start > end` the arc wraps through 0, so
/// `HueSpan { start: 355, end: 10 }` covers 355-359 and 0-9.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HueSpan {
    /// The first hue included.
    pub start: u16,
    /// The first hue excluded.
    pub end: u16,
}

impl HueSpan {
    /// The span `[start, end)`.
    pub fn new(start: u16, end: u16) -> HueSpan {
        HueSpan { start, end }
    }

    /// Whether the given hue lies on this arc.
    pub fn contains(&self, hue: u16) -> bool {
        if self.start <= self.end {
            hue >= self.start && hue < self.end
        } else {
            hue >= self.start || hue < self.end
        }
    }
}

/// Strict bounds on a percentage: the value must be greater than `above` and less than `below`,
/// where each bound is only checked if present.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Threshold {
    /// Exclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<u8>,
    /// Exclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<u8>,
}

impl Threshold {
    /// Whether the value satisfies every bound present.
    pub fn admits(&self, value: u8) -> bool {
        self.above.map_or(true, |min| value > min) && self.below.map_or(true, |max| value < max)
    }

    fn is_unbounded(&self) -> bool {
        self.above.is_none() && self.below.is_none()
    }
}

/// One rule in a shade list: if the color's hue, saturation and lightness satisfy every condition
/// given, the color gets this shade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShadeRule {
    /// The shade name.
    pub shade: String,
    /// The hues this rule applies to, or all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<HueSpan>,
    /// Bounds on saturation.
    #[serde(default, skip_serializing_if = "Threshold::is_unbounded")]
    pub saturation: Threshold,
    /// Bounds on lightness.
    #[serde(default, skip_serializing_if = "Threshold::is_unbounded")]
    pub lightness: Threshold,
}

impl ShadeRule {
    /// A rule that matches everything, to be narrowed down with the builder methods.
    pub fn new(shade: &str) -> ShadeRule {
        ShadeRule {
            shade: shade.to_string(),
            hue: None,
            saturation: Threshold::default(),
            lightness: Threshold::default(),
        }
    }

    /// Restricts the rule to the given hues.
    pub fn hue(mut self, span: HueSpan) -> ShadeRule {
        self.hue = Some(span);
        self
    }

    /// Restricts the rule to hues strictly below `h`.
    pub fn hue_below(self, h: u16) -> ShadeRule {
        self.hue(HueSpan::new(0, h))
    }

    /// Restricts the rule to hues strictly above `h`.
    pub fn hue_above(self, h: u16) -> ShadeRule {
        self.hue(HueSpan::new(h + 1, 360))
    }

    /// Requires saturation strictly above `s`.
    pub fn saturation_above(mut self, s: u8) -> ShadeRule {
        self.saturation.above = Some(s);
        self
    }

    /// Requires saturation strictly below `s`.
    pub fn saturation_below(mut self, s: u8) -> ShadeRule {
        self.saturation.below = Some(s);
        self
    }

    /// Requires lightness strictly above `l`.
    pub fn lightness_above(mut self, l: u8) -> ShadeRule {
        self.lightness.above = Some(l);
        self
    }

    /// Requires lightness strictly below `l`.
    pub fn lightness_below(mut self, l: u8) -> ShadeRule {
        self.lightness.below = Some(l);
        self
    }

    /// Whether the color satisfies every condition of this rule.
    pub fn matches(&self, hsl: HSLColor) -> bool {
        self.hue.map_or(true, |span| span.contains(hsl.h))
            && self.saturation.admits(hsl.s)
            && self.lightness.admits(hsl.l)
    }
}

/// An ordered list of shade rules, checked first to last, and the shade to use when none match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShadeSet {
    /// The rules, in priority order.
    #[serde(default)]
    pub rules: Vec<ShadeRule>,
    /// The shade for colors no rule matched.
    pub fallback: String,
}

impl ShadeSet {
    /// Builds a shade set from rules and a fallback.
    pub fn new(rules: Vec<ShadeRule>, fallback: &str) -> ShadeSet {
        ShadeSet {
            rules,
            fallback: fallback.to_string(),
        }
    }

    /// The shade for the given color.
    pub fn pick(&self, hsl: HSLColor) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(hsl))
            .map_or(&self.fallback, |rule| &rule.shade)
    }

    /// Every shade name this set can produce.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(|rule| rule.shade.as_str())
            .chain(std::iter::once(self.fallback.as_str()))
    }
}

/// A terminal neutral: Black or White, with the lightness that selects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeutralPole {
    /// The family name.
    pub family: String,
    /// The shade name.
    pub shade: String,
    /// The lightness range that selects this pole.
    pub lightness: Threshold,
}

/// How low-saturation colors are classified. Black is checked before White, and both before Gray.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeutralRules {
    /// The saturation range that makes a color neutral.
    pub saturation: Threshold,
    /// The darkest neutrals.
    pub black: NeutralPole,
    /// The lightest neutrals.
    pub white: NeutralPole,
    /// The family name for the remaining neutrals.
    pub gray_family: String,
    /// The tones of gray, by lightness.
    pub gray_shades: ShadeSet,
}

/// How browns are picked out before the hue bands are consulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrownRules {
    /// The family name.
    pub family: String,
    /// The saturation range of browns.
    pub saturation: Threshold,
    /// The lightness range of browns.
    pub lightness: Threshold,
    /// The hues of browns: a color is brown if its hue is on any of these arcs.
    pub hues: Vec<HueSpan>,
    /// The shades of brown.
    pub shades: ShadeSet,
}

impl BrownRules {
    fn matches(&self, hsl: HSLColor) -> bool {
        self.saturation.admits(hsl.s)
            && self.lightness.admits(hsl.l)
            && self.hues.iter().any(|span| span.contains(hsl.h))
    }
}

/// A band of the hue circle belonging to one family. Several bands may share a family name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HueBand {
    /// The family name.
    pub family: String,
    /// The hues in this band.
    pub span: HueSpan,
    /// The shades within this band.
    pub shades: ShadeSet,
}

/// The complete set of thresholds and names driving classification. See the module documentation
/// for the order in which the parts are consulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyTable {
    /// Rules for low-saturation colors.
    pub neutral: NeutralRules,
    /// Rules for browns, if browns are a family of their own.
    #[serde(default)]
    pub brown: Option<BrownRules>,
    /// The hue bands, which must cover the whole hue circle between them.
    pub bands: Vec<HueBand>,
}

fn band(family: &str, start: u16, end: u16, rules: Vec<ShadeRule>, fallback: &str) -> HueBand {
    HueBand {
        family: family.to_string(),
        span: HueSpan::new(start, end),
        shades: ShadeSet::new(rules, fallback),
    }
}

impl Default for FamilyTable {
    fn default() -> FamilyTable {
        let r = ShadeRule::new;
        let neutral = NeutralRules {
            saturation: Threshold { above: None, below: Some(16) },
            black: NeutralPole {
                family: "Black".to_string(),
                shade: "Black".to_string(),
                lightness: Threshold { above: None, below: Some(16) },
            },
            white: NeutralPole {
                family: "White".to_string(),
                shade: "White".to_string(),
                lightness: Threshold { above: Some(84), below: None },
            },
            gray_family: "Gray".to_string(),
            gray_shades: ShadeSet::new(
                vec![
                    r("Charcoal").lightness_below(20),
                    r("Silver").lightness_above(80),
                    r("Ash").lightness_above(60),
                    r("Slate").lightness_above(40),
                ],
                "Graphite",
            ),
        };
        let brown = BrownRules {
            family: "Brown".to_string(),
            saturation: Threshold { above: None, below: Some(50) },
            lightness: Threshold { above: Some(15), below: Some(60) },
            hues: vec![HueSpan::new(0, 41), HueSpan::new(355, 360)],
            shades: ShadeSet::new(
                vec![
                    r("Chocolate").lightness_below(25),
                    r("Tan").lightness_above(45).saturation_below(30),
                    r("Caramel").lightness_above(45),
                    r("Sienna").hue_above(25),
                    r("Coffee").saturation_above(40),
                ],
                "Mocha",
            ),
        };
        let red_core = HueSpan::new(355, 5);
        let bands = vec![
            band(
                "Red",
                355,
                10,
                vec![
                    r("Maroon").lightness_below(30),
                    r("Ruby").lightness_below(45).saturation_above(75),
                    r("Burgundy").lightness_below(45),
                    r("Scarlet").hue(red_core).lightness_above(60),
                    r("Crimson").hue(red_core),
                    r("Cherry").lightness_above(60),
                ],
                "Cardinal",
            ),
            band(
                "Orange",
                10,
                40,
                vec![
                    r("Coral").hue_below(20).lightness_below(50),
                    r("Vermilion").hue_below(20),
                    r("Amber").hue_above(30),
                    r("Terracotta").saturation_below(60),
                    r("Peach").lightness_above(70),
                    r("Tangerine").lightness_above(60),
                ],
                "Rust",
            ),
            band(
                "Yellow",
                40,
                65,
                vec![
                    r("Ochre").hue_below(50).lightness_below(50),
                    r("Gold").hue_below(50).saturation_above(80),
                    r("Honey").hue_below(50),
                    r("Mustard").saturation_below(50),
                    r("Lemon").lightness_above(80),
                ],
                "Canary",
            ),
            band(
                "Green",
                65,
                160,
                vec![
                    r("Chartreuse").hue_below(80),
                    r("Teal").hue_above(140),
                    r("Forest").hue_above(100).lightness_below(40),
                    r("Sage").lightness_above(70).saturation_below(50),
                    r("Mint").lightness_above(70),
                    r("Olive").saturation_below(50),
                    r("Hunter").lightness_below(40),
                    r("Lime").hue_below(100),
                ],
                "Emerald",
            ),
            band(
                "Aqua/Teal",
                160,
                190,
                vec![
                    r("Deep Teal").lightness_below(30),
                    r("Light Aqua").lightness_above(70),
                    r("Muted Teal").saturation_below(40),
                ],
                "Turquoise",
            ),
            band(
                "Blue",
                190,
                260,
                vec![
                    r("Turquoise").hue_below(205),
                    r("Indigo").hue_above(225).lightness_below(50),
                    r("Ultramarine").hue_above(225),
                    r("Navy").lightness_below(30),
                    r("Sky").lightness_above(70),
                    r("Azure").lightness_above(50).saturation_above(60),
                    r("Cobalt").saturation_above(70),
                ],
                "Royal",
            ),
            band(
                "Purple",
                260,
                330,
                vec![
                    r("Violet").hue_below(280).lightness_below(50),
                    r("Periwinkle").hue_below(280),
                    r("Magenta").hue_above(300),
                    r("Eggplant").lightness_below(30),
                    r("Lavender").lightness_above(80),
                    r("Lilac").lightness_above(65),
                    r("Amethyst").saturation_above(70),
                ],
                "Mauve",
            ),
            band(
                "Pink",
                330,
                355,
                vec![
                    r("Light Pink").lightness_above(80),
                    r("Hot Pink").saturation_above(80),
                    r("Deep Pink").lightness_below(50),
                    r("Blush").saturation_below(60),
                    r("Rose").hue_above(345),
                    r("Magenta").hue_below(335),
                ],
                "Fuchsia",
            ),
        ];
        FamilyTable {
            neutral,
            brown: Some(brown),
            bands,
        }
    }
}

impl FamilyTable {
    /// Parses a table from JSON and validates it.
    /// # Errors
    /// Returns [`ColorError::Config`] if the JSON is malformed or the table fails [`validate`].
    ///
    /// [`validate`]: FamilyTable::validate
    pub fn from_json_str(json: &str) -> Result<FamilyTable> {
        let table: FamilyTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Loads a table from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<FamilyTable> {
        debug!(path = %path.display(), "Loading family table");
        let content = std::fs::read_to_string(path)?;
        FamilyTable::from_json_str(&content)
    }

    /// Serializes the table as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the table can classify every color: all names are non-empty, every hue in
    /// [0, 360) belongs to some band, and every span stays within the circle.
    /// # Errors
    /// Returns [`ColorError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mut spans: Vec<HueSpan> = self.bands.iter().map(|b| b.span).collect();
        if let Some(brown) = &self.brown {
            spans.extend(brown.hues.iter().copied());
        }
        if let Some(span) = spans.iter().find(|s| s.start > 360 || s.end > 360) {
            return Err(ColorError::config(format!(
                "hue span {}-{} leaves the hue circle",
                span.start, span.end
            )));
        }
        if let Some(gap) = (0..360).find(|&h| !self.bands.iter().any(|b| b.span.contains(h))) {
            return Err(ColorError::config(format!("no hue band covers {} degrees", gap)));
        }
        if self.families().iter().any(|f| f.trim().is_empty()) {
            return Err(ColorError::config("empty family name"));
        }
        let shade_sets = self
            .bands
            .iter()
            .map(|b| &b.shades)
            .chain(self.brown.iter().map(|b| &b.shades))
            .chain(std::iter::once(&self.neutral.gray_shades));
        for set in shade_sets {
            if set.vocabulary().any(|s| s.trim().is_empty()) {
                return Err(ColorError::config("empty shade name"));
            }
        }
        Ok(())
    }

    /// Every main family this table can produce, not counting [`UNKNOWN_FAMILY`].
    pub fn families(&self) -> BTreeSet<&str> {
        let mut families = BTreeSet::new();
        families.insert(self.neutral.black.family.as_str());
        families.insert(self.neutral.white.family.as_str());
        families.insert(self.neutral.gray_family.as_str());
        if let Some(brown) = &self.brown {
            families.insert(brown.family.as_str());
        }
        families.extend(self.bands.iter().map(|b| b.family.as_str()));
        families
    }

    /// The shade vocabulary of a main family: every shade this table can pair with it. Empty for
    /// families the table does not know.
    pub fn shades(&self, main: &str) -> BTreeSet<&str> {
        let mut shades = BTreeSet::new();
        let neutral = &self.neutral;
        for pole in &[&neutral.black, &neutral.white] {
            if pole.family == main {
                shades.insert(pole.shade.as_str());
            }
        }
        if neutral.gray_family == main {
            shades.extend(neutral.gray_shades.vocabulary());
        }
        if let Some(brown) = self.brown.as_ref().filter(|b| b.family == main) {
            shades.extend(brown.shades.vocabulary());
        }
        for band in self.bands.iter().filter(|b| b.family == main) {
            shades.extend(band.shades.vocabulary());
        }
        shades
    }

    /// Whether a family label is one this table could have produced: a known main family with
    /// either no shade or a shade from that family's vocabulary, or the unknown family.
    pub fn is_valid(&self, family: &Family) -> bool {
        let main = family.main();
        if main == UNKNOWN_FAMILY {
            return family.sub().is_none();
        }
        self.families().contains(main)
            && family.sub().map_or(true, |sub| self.shades(main).contains(sub))
    }

    /// Classifies a color given as HSL.
    pub fn classify_hsl(&self, hsl: HSLColor) -> Family {
        let neutral = &self.neutral;
        if neutral.saturation.admits(hsl.s) {
            for pole in &[&neutral.black, &neutral.white] {
                if pole.lightness.admits(hsl.l) {
                    return Family::new(pole.family.as_str(), Some(pole.shade.clone()));
                }
            }
            let tone = neutral.gray_shades.pick(hsl);
            return Family::new(neutral.gray_family.as_str(), Some(tone.to_string()));
        }

        if let Some(brown) = self.brown.as_ref().filter(|b| b.matches(hsl)) {
            let shade = brown.shades.pick(hsl);
            return Family::new(brown.family.as_str(), Some(shade.to_string()));
        }

        match self.bands.iter().find(|b| b.span.contains(hsl.h)) {
            Some(band) => Family::new(band.family.as_str(), Some(band.shades.pick(hsl).to_string())),
            None => Family::unknown(),
        }
    }
}

/// How a batch operation treats an item that fails to parse or validate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchPolicy {
    /// Drop the bad item and continue; the output is shorter than the input.
    SkipInvalid,
    /// Stop at the first bad item and return its error.
    AbortOnError,
}

/// A summary of a color and its classification, with a few coarse flags useful for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    /// The canonical hex code.
    pub hex: String,
    /// The RGB value.
    pub rgb: RGBColor,
    /// The rounded HSL value.
    pub hsl: HSLColor,
    /// The family and shade.
    pub family: Family,
    /// Saturation of at most 15%.
    pub is_grayish: bool,
    /// Lightness of at most 30%.
    pub is_dark: bool,
    /// Saturation of at least 70%.
    pub is_vibrant: bool,
}

/// One classified item of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedColor {
    /// The position of the item in the batch input.
    pub index: usize,
    /// The parsed color.
    pub color: Color,
    /// Its family.
    pub family: Family,
}

/// Classifies colors with a given [`FamilyTable`].
/// # Example
/// ```
/// # use tincture::{FamilyClassifier, FamilyTable, colors::RGBColor};
/// let classifier = FamilyClassifier::new(FamilyTable::default()).unwrap();
/// let family = classifier.classify(RGBColor { r: 0, g: 0, b: 128 });
/// assert_eq!(family.main(), "Blue");
/// assert_eq!(family.sub(), Some("Indigo"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyClassifier {
    table: FamilyTable,
}

impl Default for FamilyClassifier {
    fn default() -> FamilyClassifier {
        DEFAULT_CLASSIFIER.clone()
    }
}

impl FamilyClassifier {
    /// Creates a classifier from a table, validating it first.
    pub fn new(table: FamilyTable) -> Result<FamilyClassifier> {
        table.validate()?;
        Ok(FamilyClassifier { table })
    }

    /// The table this classifier uses.
    pub fn table(&self) -> &FamilyTable {
        &self.table
    }

    /// Classifies a color.
    pub fn classify(&self, rgb: RGBColor) -> Family {
        self.table.classify_hsl(HSLColor::from_rgb(rgb))
    }

    /// Parses a hex or `rgb()` string and classifies it.
    pub fn classify_str(&self, s: &str) -> Result<Family> {
        Ok(self.classify(parse_color(s)?))
    }

    /// Classifies a color and reports its HSL value and display flags.
    pub fn analyze(&self, rgb: RGBColor) -> ColorAnalysis {
        let hsl = HSLColor::from_rgb(rgb);
        ColorAnalysis {
            hex: rgb.to_string(),
            rgb,
            hsl,
            family: self.table.classify_hsl(hsl),
            is_grayish: hsl.s <= 15,
            is_dark: hsl.l <= 30,
            is_vibrant: hsl.s >= 70,
        }
    }

    /// Parses a hex or `rgb()` string and analyzes it.
    pub fn analyze_str(&self, s: &str) -> Result<ColorAnalysis> {
        Ok(self.analyze(parse_color(s)?))
    }

    /// Classifies many color strings, preserving input order. Each output item records the index of
    /// the input it came from, so skipped items can be identified.
    /// # Errors
    /// With [`BatchPolicy::AbortOnError`], the first parse error. With
    /// [`BatchPolicy::SkipInvalid`], never.
    pub fn batch_classify<S: AsRef<str>>(
        &self,
        inputs: &[S],
        policy: BatchPolicy,
    ) -> Result<Vec<ClassifiedColor>> {
        let mut classified = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            match parse_color(input.as_ref()) {
                Ok(rgb) => classified.push(ClassifiedColor {
                    index,
                    color: Color::new(rgb),
                    family: self.classify(rgb),
                }),
                Err(err) if policy == BatchPolicy::SkipInvalid && err.is_item_error() => {
                    warn!(index, error = %err, "Skipping unparseable color");
                }
                Err(err) => return Err(err),
            }
        }
        debug!(inputs = inputs.len(), classified = classified.len(), "Batch classified");
        Ok(classified)
    }
}

/// Classifies a color with the default table.
/// # Example
/// ```
/// # use tincture::{get_color_family, colors::RGBColor};
/// assert_eq!(get_color_family(RGBColor { r: 255, g: 0, b: 0 }).main(), "Red");
/// assert_eq!(get_color_family(RGBColor { r: 128, g: 128, b: 128 }).main(), "Gray");
/// ```
pub fn get_color_family(rgb: RGBColor) -> Family {
    DEFAULT_CLASSIFIER.classify(rgb)
}

/// Parses a hex code and classifies it with the default table.
pub fn classify_hex(hex: &str) -> Result<Family> {
    Ok(get_color_family(RGBColor::from_hex_code(hex)?))
}

/// Analyzes a color with the default table.
pub fn analyze(rgb: RGBColor) -> ColorAnalysis {
    DEFAULT_CLASSIFIER.analyze(rgb)
}

/// Parses a hex code and analyzes it with the default table.
/// # Example
/// ```
/// # use tincture::classifier::analyze_hex;
/// let analysis = analyze_hex("#1A1A2E").unwrap();
/// assert!(analysis.is_dark);
/// assert_eq!(analysis.hex, "#1A1A2E");
/// ```
pub fn analyze_hex(hex: &str) -> Result<ColorAnalysis> {
    Ok(analyze(RGBColor::from_hex_code(hex)?))
}

/// Classifies many hex or `rgb()` strings with the default table. See
/// [`FamilyClassifier::batch_classify`].
pub fn batch_classify<S: AsRef<str>>(
    inputs: &[S],
    policy: BatchPolicy,
) -> Result<Vec<ClassifiedColor>> {
    DEFAULT_CLASSIFIER.batch_classify(inputs, policy)
}
