/*!
 * Parsers for the text MAPDL echoes back after a command.
 *
 * Each parser is a row of `PATTERN_TABLE`: a regular expression anchored to a fixed echo phrase
 * and the shape of the value it extracts. Matching is case-sensitive and spacing-exact.
 * A parser never fails: missing, malformed or absent output all give `ParseResult::NotFound`.
 */

use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, EnumString};

/// Signed integer or real number, optionally with an exponent.
const NUMBER_PATTERN: &str = r"[-+]?(?:\d*\.\d+|\d+\.?)(?:[Ee][+-]?\d+)?";

/// Parsers available for command responses.
/// Parsed from either the parser name or the legacy `parse_*` function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display)]
#[serde(rename_all = "snake_case")]
pub enum ParserKind {
    #[strum(to_string = "element", serialize = "parse_e")]
    Element,
    #[strum(to_string = "element_type", serialize = "parse_et")]
    ElementType,
    #[strum(to_string = "keypoint", serialize = "parse_k")]
    Keypoint,
    #[strum(to_string = "keypoint_on_line", serialize = "parse_kl")]
    KeypointOnLine,
    #[strum(to_string = "keypoint_at_node", serialize = "parse_knode")]
    KeypointAtNode,
    #[strum(to_string = "generated_keypoint", serialize = "parse_kpoint")]
    GeneratedKeypoint,
    #[strum(to_string = "keypoint_distance", serialize = "parse_kdist")]
    KeypointDistance,
    #[strum(to_string = "node", serialize = "parse_n")]
    Node,
    #[strum(to_string = "node_distance", serialize = "parse_ndist")]
    NodeDistance,
    #[strum(to_string = "line_number", serialize = "parse_line_no")]
    LineNumber,
    #[strum(to_string = "line_numbers", serialize = "parse_line_nos")]
    LineNumbers,
    #[strum(to_string = "area_number", serialize = "parse_a")]
    AreaNumber,
    #[strum(to_string = "output_areas", serialize = "parse_output_areas")]
    OutputAreas,
    #[strum(to_string = "volume_number", serialize = "parse_v")]
    VolumeNumber,
    #[strum(to_string = "output_volume_area", serialize = "parse_output_volume_area")]
    OutputVolumeArea,
}

/// What a parser pulls out of the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// First capture group of the first match.
    Id,
    /// First capture group of every match.
    Ids,
    /// The last four numbers in the text: distance, then X, Y, Z offsets.
    Distance,
}

/// One row of the pattern table.
struct PatternDef {
    kind: ParserKind,
    pattern: &'static str,
    shape: Shape,
}

/// Pattern table -- every parser is declared here.
const PATTERN_TABLE: &[PatternDef] = &[
    PatternDef{kind: ParserKind::Element, pattern: r"ELEMENT\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::ElementType, pattern: r"ELEMENT TYPE\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::Keypoint, pattern: r"KEYPOINT NUMBER =\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::KeypointOnLine, pattern: r"KEYPOINT\s+([0-9]+)\s+", shape: Shape::Id},
    PatternDef{kind: ParserKind::KeypointAtNode, pattern: r"KEYPOINT NUMBER =\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::GeneratedKeypoint, pattern: r"kpoint=\s+([0-9]+)\s+", shape: Shape::Id},
    PatternDef{kind: ParserKind::KeypointDistance, pattern: NUMBER_PATTERN, shape: Shape::Distance},
    PatternDef{kind: ParserKind::Node, pattern: r"NODE\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::NodeDistance, pattern: NUMBER_PATTERN, shape: Shape::Distance},
    PatternDef{kind: ParserKind::LineNumber, pattern: r"LINE NO[.]=\s+([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::LineNumbers, pattern: r"LINE NO[.]=\s*([0-9]+)", shape: Shape::Ids},
    PatternDef{kind: ParserKind::AreaNumber, pattern: r"AREA NUMBER =\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::OutputAreas, pattern: r"OUTPUT AREAS =\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::VolumeNumber, pattern: r"VOLUME NUMBER =\s*([0-9]+)", shape: Shape::Id},
    PatternDef{kind: ParserKind::OutputVolumeArea, pattern: r"OUTPUT (?:AREA|VOLUME|AREAS) =\s*([0-9]+)", shape: Shape::Id},
];

/// Compiled pattern table, built on first use.
static COMPILED_TABLE: LazyLock<Vec<(ParserKind, Shape, Regex)>> = LazyLock::new(|| {
    PATTERN_TABLE
        .iter()
        .filter_map(|def| match Regex::new(def.pattern) {
            Ok(regex) => Some((def.kind, def.shape, regex)),
            Err(error) => {
                log::error!("Pattern for parser {} does not compile: {}", def.kind, error);
                None
            },
        })
        .collect()
});

/// Distance between two entities with the coordinate offsets from the first to the second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub dist: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Distance {
    /// `[DIST, X, Y, Z]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.dist, self.x, self.y, self.z]
    }
}

/// A value extracted from a command response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parsed {
    /// Entity number (node, keypoint, line, area, volume, element, element type).
    Id(u64),
    /// Several entity numbers.
    Ids(Vec<u64>),
    /// Distance with offsets.
    Distance(Distance),
}

/// Outcome of applying a parser.
/// `NotFound` covers absent output, a missing phrase and malformed numbers alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ParseResult {
    Found(Parsed),
    NotFound,
}
impl ParseResult {
    pub fn is_found(&self) -> bool {
        matches!(self, ParseResult::Found(_))
    }

    /// Convert into an `Option`.
    pub fn found(self) -> Option<Parsed> {
        match self {
            ParseResult::Found(parsed) => Some(parsed),
            ParseResult::NotFound => None,
        }
    }

    /// The entity number, if a single one was found.
    pub fn entity_id(&self) -> Option<u64> {
        match self {
            ParseResult::Found(Parsed::Id(id)) => Some(*id),
            _ => None,
        }
    }

    /// The entity numbers, if a list was found.
    pub fn entity_ids(&self) -> Option<&[u64]> {
        match self {
            ParseResult::Found(Parsed::Ids(ids)) => Some(ids),
            _ => None,
        }
    }

    /// The distance, if one was found.
    pub fn distance(&self) -> Option<Distance> {
        match self {
            ParseResult::Found(Parsed::Distance(distance)) => Some(*distance),
            _ => None,
        }
    }
}
impl From<Option<Parsed>> for ParseResult {
    fn from(parsed: Option<Parsed>) -> Self {
        match parsed {
            Some(parsed) => ParseResult::Found(parsed),
            None => ParseResult::NotFound,
        }
    }
}

/// Apply a parser to a command response.
pub fn parse(kind: ParserKind, text: Option<&str>) -> ParseResult {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return ParseResult::NotFound,
    };
    let Some((_, shape, regex)) = COMPILED_TABLE.iter().find(|(k, _, _)| *k == kind) else {
        return ParseResult::NotFound;
    };

    let parsed = match shape {
        Shape::Id => regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .map(Parsed::Id),
        Shape::Ids => {
            let ids = regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().parse::<u64>().ok())
                .collect::<Option<Vec<_>>>();
            match ids {
                Some(ids) if !ids.is_empty() => Some(Parsed::Ids(ids)),
                _ => None,
            }
        },
        Shape::Distance => {
            let numbers = regex.find_iter(text).map(|m| m.as_str()).collect::<Vec<_>>();
            if numbers.len() < 4 {
                None
            } else {
                let values = numbers[numbers.len() - 4..]
                    .iter()
                    .map(|n| n.parse::<f64>().ok())
                    .collect::<Option<Vec<_>>>();
                values.map(|v| Parsed::Distance(Distance{dist: v[0], x: v[1], y: v[2], z: v[3]}))
            }
        },
    };
    parsed.into()
}

/// Element number from the `E` echo (`ELEMENT 8`).
pub fn parse_e(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::Element, text).entity_id()
}

/// Element type number from the `ET` echo.
pub fn parse_et(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::ElementType, text).entity_id()
}

/// Keypoint number from the `K` echo (`KEYPOINT NUMBER = 1`).
pub fn parse_k(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::Keypoint, text).entity_id()
}

pub fn parse_kl(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::KeypointOnLine, text).entity_id()
}

pub fn parse_knode(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::KeypointAtNode, text).entity_id()
}

pub fn parse_kpoint(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::GeneratedKeypoint, text).entity_id()
}

/// `[DIST, X, Y, Z]` from the `KDIST` listing.
pub fn parse_kdist(text: Option<&str>) -> Option<[f64; 4]> {
    parse(ParserKind::KeypointDistance, text).distance().map(|d| d.as_array())
}

pub fn parse_n(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::Node, text).entity_id()
}

/// `[DIST, X, Y, Z]` from the `NDIST` listing.
pub fn parse_ndist(text: Option<&str>) -> Option<[f64; 4]> {
    parse(ParserKind::NodeDistance, text).distance().map(|d| d.as_array())
}

pub fn parse_line_no(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::LineNumber, text).entity_id()
}

pub fn parse_line_nos(text: Option<&str>) -> Option<Vec<u64>> {
    parse(ParserKind::LineNumbers, text).found().and_then(|parsed| match parsed {
        Parsed::Ids(ids) => Some(ids),
        _ => None,
    })
}

pub fn parse_a(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::AreaNumber, text).entity_id()
}

pub fn parse_output_areas(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::OutputAreas, text).entity_id()
}

pub fn parse_v(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::VolumeNumber, text).entity_id()
}

/// Area or volume number reported by primitives and booleans (`OUTPUT VOLUME = 1`).
pub fn parse_output_volume_area(text: Option<&str>) -> Option<u64> {
    parse(ParserKind::OutputVolumeArea, text).entity_id()
}
