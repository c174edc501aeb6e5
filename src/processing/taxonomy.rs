//! Closed-vocabulary tables used by the heuristic extractors
//!
//! Everything here is static configuration data: extending a category is a
//! matter of adding a term, never of touching extraction logic.

/// A named category of technical skill terms.
pub struct SkillCategory {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

pub const TECHNICAL_SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "programming_languages",
        terms: &[
            "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust", "kotlin",
            "swift", "typescript", "scala", "r", "matlab", "perl", "sql", "html", "css",
        ],
    },
    SkillCategory {
        name: "frameworks",
        terms: &[
            "react", "angular", "vue", "django", "flask", "spring", "express", "laravel",
            "rails", "asp.net", "bootstrap", "jquery", "node.js", "next.js", "nuxt",
        ],
    },
    SkillCategory {
        name: "databases",
        terms: &[
            "mysql", "postgresql", "mongodb", "sqlite", "oracle", "sql server", "redis",
            "elasticsearch", "cassandra", "dynamodb", "firebase", "mariadb",
        ],
    },
    SkillCategory {
        name: "cloud_platforms",
        terms: &[
            "aws", "azure", "google cloud", "gcp", "docker", "kubernetes", "terraform",
            "jenkins", "gitlab", "github actions", "circleci", "travis ci",
        ],
    },
    SkillCategory {
        name: "data_science",
        terms: &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
            "pandas", "numpy", "matplotlib", "seaborn", "jupyter", "tableau", "power bi",
            "apache spark", "hadoop", "kafka", "airflow",
        ],
    },
    SkillCategory {
        name: "tools",
        terms: &[
            "git", "linux", "bash", "powershell", "vim", "vscode", "intellij", "eclipse",
            "postman", "swagger", "jira", "confluence", "slack", "notion",
        ],
    },
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "analytical thinking",
    "project management", "time management", "adaptability", "creativity", "critical thinking",
    "collaboration", "presentation", "negotiation", "customer service", "mentoring",
    "strategic planning", "innovation", "decision making", "conflict resolution",
];

/// Degree-level keywords paired with their display names, highest first.
pub const EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("phd", "Ph.D."),
    ("doctorate", "Doctorate"),
    ("master", "Master's Degree"),
    ("mba", "MBA"),
    ("bachelor", "Bachelor's Degree"),
    ("associate", "Associate Degree"),
    ("diploma", "Diploma"),
    ("certificate", "Certificate"),
    ("high school", "High School"),
];

pub const DEGREE_FIELDS: &[&str] = &[
    "computer science", "engineering", "business", "marketing", "finance",
    "economics", "mathematics", "statistics", "physics", "chemistry",
    "biology", "psychology", "sociology", "english", "literature",
    "history", "philosophy", "law", "medicine", "nursing",
];

/// University-name patterns; each first capture group is the name.
pub const UNIVERSITY_PATTERNS: &[&str] = &[
    r"university of ([a-z\s]+)",
    r"([a-z\s]+) university",
    r"([a-z\s]+) institute of technology",
    r"([a-z\s]+) college",
];

pub const KNOWN_CERTIFICATIONS: &[&str] = &[
    "aws certified", "azure certified", "google cloud certified",
    "cissp", "cisa", "cism", "comptia", "ccna", "ccnp", "ccie",
    "pmp", "prince2", "scrum master", "agile", "itil",
    "cpa", "cfa", "frm", "cma", "cia",
];

pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile"];
pub const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work history", "employment"];
pub const EDUCATION_KEYWORDS: &[&str] = &["education", "degree", "university", "college"];
pub const SKILLS_KEYWORDS: &[&str] = &["skills", "technical skills", "competencies"];
pub const PROJECTS_KEYWORDS: &[&str] = &["projects", "portfolio", "github"];
pub const CERTIFICATIONS_KEYWORDS: &[&str] = &["certification", "certified", "license"];

/// Stopwords dropped before the keyword-relevance overlap is computed.
pub const SCORING_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Every taxonomy term a resume is scanned against for skills.
pub fn all_skill_terms() -> Vec<&'static str> {
    TECHNICAL_SKILLS
        .iter()
        .flat_map(|category| category.terms.iter().copied())
        .chain(SOFT_SKILLS.iter().copied())
        .collect()
}

/// Title-case a term the way skill and certification names are reported:
/// first letter of each alphabetic run uppercased, the rest lowercased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
