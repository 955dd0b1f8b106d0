use std::fmt::Display;
use std::io::Write;

use clap::ValueEnum;
use tabwriter::TabWriter;

use crate::api::types::CompanyProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompanySize {
    #[value(name = "1-10")]
    Micro,
    #[value(name = "11-50")]
    Small,
    #[value(name = "51-200")]
    Medium,
    #[value(name = "201+")]
    Large,
}

impl CompanySize {
    pub const ALL: [Self; 4] = [Self::Micro, Self::Small, Self::Medium, Self::Large];

    /// Value stored by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201+",
        }
    }
}

impl Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} employees", self.as_str())
    }
}

pub fn format_companies(companies: &[CompanyProfile], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "NAME\tINDUSTRY\tSIZE\tLOCATION\tEMAIL").unwrap();
    }

    for company in companies {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}",
            or_dash(&company.name),
            or_dash(&company.industry),
            or_dash(&company.size),
            or_dash(&company.location),
            company.email,
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

// freshly registered companies have every field empty
fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
