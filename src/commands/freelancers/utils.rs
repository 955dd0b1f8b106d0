use std::io::Write;
use std::str::FromStr;

use anyhow::{anyhow, ensure, Result};
use tabwriter::TabWriter;

use crate::api::types::{FreelancerProfile, PortfolioItem};
use crate::utils::split_list;

pub const DEFAULT_AVAILABILITY: &str = "Full-time";

/// Parses a portfolio entry written as `title|description|url|tech1, tech2`.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioArg(pub PortfolioItem);

impl FromStr for PortfolioArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(4, '|').map(str::trim);

        let title = parts
            .next()
            .filter(|title| !title.is_empty())
            .ok_or_else(|| anyhow!("Portfolio entry needs a title"))?;

        let description = parts.next().unwrap_or_default();
        let url = parts.next().unwrap_or_default();
        let technologies = parts.next().map(split_list).unwrap_or_default();

        Ok(Self(PortfolioItem {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            technologies,
        }))
    }
}

pub fn validate_hourly_rate(rate: Option<f64>) -> Result<Option<f64>> {
    if let Some(rate) = rate {
        ensure!(
            rate.is_finite() && rate >= 0.0,
            "Hourly rate cannot be negative"
        );
    }

    Ok(rate)
}

pub fn format_freelancers(freelancers: &[FreelancerProfile], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "EMAIL\tSKILLS\tRATE\tAVAILABILITY\tPORTFOLIO").unwrap();
    }

    for freelancer in freelancers {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}",
            freelancer.email,
            freelancer.skills.join(", "),
            freelancer
                .hourly_rate
                .map_or_else(|| "-".to_string(), |rate| format!("€{rate}/h")),
            freelancer.availability.as_deref().unwrap_or("-"),
            freelancer.portfolio.len(),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}
