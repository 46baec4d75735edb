// src/labels.rs
//
// Presentation only: short field code → column title for exported files.
// Codes not listed keep their code as the title.

pub const FIELD_LABELS: &[(&str, &str)] = &[
    ("pac", "Pace/Diving"),
    ("sho", "Shooting/Handling"),
    ("pas", "Passing/Kicking"),
    ("dri", "Dribbling/Reflexes"),
    ("def", "Defending/Pace"),
    ("phy", "Physical/Positioning"),
    ("ae", "Age"),
    ("oa", "Overall Score"),
    ("pt", "Potential Score"),
    ("pi", "Player ID"),
    ("hi", "Height"),
    ("wi", "Weight"),
    ("pf", "Preferred Foot"),
    ("bo", "Best Overall"),
    ("bp", "Best Position"),
    ("gu", "Growth"),
    ("jt", "Joined Team"),
    ("le", "Loan End"),
    ("vl", "Value"),
    ("wg", "Wage"),
    ("rc", "Release Clause"),
    ("ta", "Total Attacking Score"),
    ("cr", "Crossing"),
    ("fi", "Finishing"),
    ("he", "Heading Accuracy"),
    ("sh", "Short Passing"),
    ("vo", "Volleys"),
    ("ts", "Total Skill"),
    ("dr", "Dribbling"),
    ("cu", "Curve"),
    ("fr", "FK Accuracy"),
    ("lo", "Long Passing"),
    ("bl", "Ball Control"),
    ("to", "Total Movement"),
    ("ac", "Acceleration"),
    ("sp", "Sprint Speed"),
    ("ag", "Agility"),
    ("re", "Reactions"),
    ("ba", "Balance"),
    ("tp", "Total Power"),
    ("so", "Shot Power"),
    ("ju", "Jumping"),
    ("st", "Stamina"),
    ("sr", "Strength"),
    ("ln", "Long Shots"),
    ("te", "Total Mentality"),
    ("ar", "Aggression"),
    ("in", "Interceptions"),
    ("po", "Attack Position"),
    ("vi", "Vision"),
    ("pe", "Penalties"),
    ("cm", "Composure"),
    ("td", "Total Defending"),
    ("ma", "Defensive Awareness"),
    ("sa", "Standing Tackle"),
    ("sl", "Sliding tackle"),
    ("tg", "Total Goalkeeping"),
    ("gd", "GK Diving"),
    ("gh", "GK Handling"),
    ("gc", "GK Kicking"),
    ("gp", "GK Positioning"),
    ("gr", "GK Reflexes"),
    ("tt", "Total Stats"),
    ("bs", "Base Stats"),
    ("wk", "Weak Foot"),
    ("sk", "Skill Moves"),
    ("aw", "Attacking Work Rate"),
    ("dw", "Defensive Work Rate"),
    ("ir", "International Reputation"),
    ("bt", "Body Type"),
    ("hc", "Real Face"),
];

pub fn field_label(code: &str) -> Option<&'static str> {
    FIELD_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Title for `code`, honouring the rename toggle.
pub fn column_title(code: &str, rename: bool) -> String {
    if rename {
        field_label(code).map(String::from).unwrap_or_else(|| s!(code))
    } else {
        s!(code)
    }
}
