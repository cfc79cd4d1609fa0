use crate::{content::assessment::AttitudeTier, foundation::core::Locale};

/// Fixed text tables for one locale.
pub struct Labels {
    pub objectives_heading: &'static str,
    pub narrative_heading: &'static str,
    pub recommendations_heading: &'static str,
    pub attitude_heading: &'static str,
    pub months: [&'static str; 12],
    tiers: [(&'static str, &'static str); 3],
}

static ES: Labels = Labels {
    objectives_heading: "Objetivos de la Sesión",
    narrative_heading: "Desarrollo de la Sesión",
    recommendations_heading: "Recomendación y Próximos Pasos",
    attitude_heading: "Actitud en Clase",
    months: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    tiers: [
        (
            "Excelente",
            "Actitud sobresaliente, participación activa y constante.",
        ),
        ("Buena", "Actitud positiva con participación regular."),
        (
            "En desarrollo",
            "Requiere acompañamiento para mejorar su participación.",
        ),
    ],
};

static EN: Labels = Labels {
    objectives_heading: "Session Objectives",
    narrative_heading: "Session Summary",
    recommendations_heading: "Recommendations and Next Steps",
    attitude_heading: "Attitude in Class",
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    tiers: [
        (
            "Excellent",
            "Outstanding attitude with active, steady participation.",
        ),
        ("Good", "Positive attitude with regular participation."),
        ("Needs support", "Needs guidance to improve participation."),
    ],
};

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
    }
}

impl Labels {
    pub fn tier_label(&self, tier: AttitudeTier) -> &'static str {
        self.tiers[tier_index(tier)].0
    }

    pub fn tier_description(&self, tier: AttitudeTier) -> &'static str {
        self.tiers[tier_index(tier)].1
    }
}

fn tier_index(tier: AttitudeTier) -> usize {
    match tier {
        AttitudeTier::Excellent => 0,
        AttitudeTier::Good => 1,
        AttitudeTier::NeedsSupport => 2,
    }
}

/// Header banner text, e.g. `SESIÓN N° 3 DE 8`.
pub fn session_banner(locale: Locale, session: u32, total: u32) -> String {
    match locale {
        Locale::Es => format!("SESIÓN N° {session} DE {total}"),
        Locale::En => format!("SESSION {session} OF {total}"),
    }
}

pub fn copyright_line(year: i32, holder: &str) -> String {
    format!("© {year} {holder}")
}
