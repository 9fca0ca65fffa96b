//! Share-link query codec.
//!
//! # Responsibility
//! - Encode particle counts as a `p=..&n=..&e=..` query.
//! - Decode a query into clamped particle counts for engine seeding.
//! - Build the builder link for a periodic-table tile.
//!
//! # Invariants
//! - Missing `n` defaults to `stable_neutron_count(p)`; missing `e` to `p`.
//! - A blank value (`n=`) counts as missing.
//! - Decoded values are always clamped to the supplied limits.
//! - The first occurrence of a repeated parameter wins.
//! - Unrelated parameters and a leading `?` are ignored.

use crate::model::atom::{ParticleCounts, ParticleLimits};
use crate::model::element::element_by_protons;
use crate::model::stability::stable_neutron_count;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SHARE_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[?&])([pne])=([^&#]*)").expect("valid share param regex"));

/// Strict decode errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareLinkError {
    /// Query has no `p` parameter.
    MissingProtons,
    /// A parameter value is not a decimal integer.
    InvalidNumber { param: char, value: String },
}

impl Display for ShareLinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProtons => write!(f, "share link is missing the `p` parameter"),
            Self::InvalidNumber { param, value } => {
                write!(f, "share link parameter `{param}` is not an integer: `{value}`")
            }
        }
    }
}

impl Error for ShareLinkError {}

/// Encodes counts as a share-link query without a leading `?`.
pub fn encode_share_query(counts: ParticleCounts) -> String {
    format!(
        "p={}&n={}&e={}",
        counts.protons, counts.neutrons, counts.electrons
    )
}

/// Builder query for a known element's common isotope, neutral charge.
///
/// `None` outside the periodic table.
pub fn element_share_query(protons: u32) -> Option<String> {
    element_by_protons(protons).map(|element| {
        encode_share_query(ParticleCounts::new(
            element.atomic_number,
            element.neutrons,
            element.atomic_number,
        ))
    })
}

/// Decodes a share-link query.
///
/// # Errors
/// - `MissingProtons` when `p` is absent or blank.
/// - `InvalidNumber` when any of `p`, `n`, `e` is present but not an integer.
pub fn parse_share_query(
    query: &str,
    limits: &ParticleLimits,
) -> Result<ParticleCounts, ShareLinkError> {
    let mut protons_raw: Option<&str> = None;
    let mut neutrons_raw: Option<&str> = None;
    let mut electrons_raw: Option<&str> = None;

    for captures in SHARE_PARAM_RE.captures_iter(query.trim()) {
        let (Some(key), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let slot = match key.as_str() {
            "p" => &mut protons_raw,
            "n" => &mut neutrons_raw,
            _ => &mut electrons_raw,
        };
        if slot.is_none() {
            *slot = Some(value.as_str());
        }
    }

    let protons_raw = protons_raw.filter(|value| !value.trim().is_empty());
    let neutrons_raw = neutrons_raw.filter(|value| !value.trim().is_empty());
    let electrons_raw = electrons_raw.filter(|value| !value.trim().is_empty());

    let protons_value = protons_raw.ok_or(ShareLinkError::MissingProtons)?;
    let protons = limits.clamp_protons(parse_param('p', protons_value)?);

    let neutrons = match neutrons_raw {
        Some(value) => limits.clamp_neutrons(parse_param('n', value)?),
        None => limits.clamp_neutrons(i64::from(stable_neutron_count(protons))),
    };
    let electrons = match electrons_raw {
        Some(value) => limits.clamp_electrons(parse_param('e', value)?),
        None => limits.clamp_electrons(i64::from(protons)),
    };

    Ok(ParticleCounts::new(protons, neutrons, electrons))
}

/// Decodes a query for engine seeding; never fails.
///
/// Returns `None` when the query carries no preset or is malformed, in which
/// case the caller keeps its default state.
pub fn seed_from_share_query(query: &str, limits: &ParticleLimits) -> Option<ParticleCounts> {
    match parse_share_query(query, limits) {
        Ok(counts) => Some(counts),
        Err(ShareLinkError::MissingProtons) => None,
        Err(err) => {
            warn!("event=share_link_decode module=share status=error error={err}");
            None
        }
    }
}

fn parse_param(param: char, value: &str) -> Result<i64, ShareLinkError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ShareLinkError::InvalidNumber {
            param,
            value: value.to_string(),
        })
}
