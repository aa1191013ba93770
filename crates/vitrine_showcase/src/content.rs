//! Showcase content model
//!
//! Titles, tech tags, links, and preview images are opaque strings passed
//! through to the embedding view untouched; nothing here is fetched,
//! cached, or mutated by the animator.

/// A project row in the showcase list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Stable key, also the display ordinal ("01", "02", ...)
    pub id: String,
    pub title: String,
    pub tech: Vec<String>,
    /// External "visit" link
    pub link: String,
    /// Preview image URL
    pub preview: String,
}

/// A resume card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeCard {
    /// Stable key, also the display ordinal
    pub id: String,
    pub title: String,
    pub lines: Vec<String>,
}

/// A labeled skill icon
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub label: String,
    pub icon: String,
}

/// A titled group of skills
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

/// Sample project list for demos and tests
pub fn sample_projects() -> Vec<ProjectInfo> {
    let project = |id: &str, title: &str, tech: &[&str], slug: &str| ProjectInfo {
        id: id.to_string(),
        title: title.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        link: format!("https://example.com/{slug}"),
        preview: format!("/assets/images/{slug}.png"),
    };

    vec![
        project("01", "Students Portal", &["Next.js", "Tailwind CSS"], "students-portal"),
        project("02", "Hoodie Store", &["Next.js", "Tailwind CSS"], "hoodie-store"),
        project("03", "Movie DB", &["React", "Tailwind CSS", "Movie API"], "movie-db"),
        project("04", "Fitness Tracker", &["Next.js", "Tailwind CSS"], "fitness-tracker"),
    ]
}

/// Sample resume cards for demos and tests
pub fn sample_resume() -> Vec<ResumeCard> {
    let card = |id: &str, title: &str, lines: &[&str]| ResumeCard {
        id: id.to_string(),
        title: title.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    };

    vec![
        card("01", "Personal Information", &["Name: Sample Developer"]),
        card(
            "02",
            "Education",
            &[
                "Institution: Sample University",
                "Degree: BSc in Software Engineering",
                "Duration: 2022 - 2028",
            ],
        ),
        card("03", "Languages", &["English (Fluent)"]),
    ]
}

/// Sample skill categories for demos and tests
pub fn sample_skills() -> Vec<SkillCategory> {
    let skill = |label: &str, icon: &str| Skill {
        label: label.to_string(),
        icon: format!("/assets/icons/{icon}"),
    };

    vec![
        SkillCategory {
            title: "Frontend".to_string(),
            skills: vec![
                skill("React", "react.png"),
                skill("Next.js", "next-js.png"),
                skill("Tailwind CSS", "tailwind.png"),
            ],
        },
        SkillCategory {
            title: "Backend".to_string(),
            skills: vec![
                skill("Django", "django.svg"),
                skill("Express", "expressjs.svg"),
                skill("Node.js", "nodejs.svg"),
            ],
        },
        SkillCategory {
            title: "Database".to_string(),
            skills: vec![skill("MySQL", "mysql.svg"), skill("PostgreSQL", "postgresql.svg")],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_projects_have_stable_ids() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 4);
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_links_pass_through_unchanged() {
        let projects = sample_projects();
        assert!(projects[0].link.starts_with("https://"));
        assert!(projects[0].preview.ends_with(".png"));
    }
}
