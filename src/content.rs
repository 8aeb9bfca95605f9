//! Static site content. Read-only tables compiled into both the server and the
//! WASM bundle.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub experience: &'static str,
    pub projects_completed: &'static str,
    pub clients_satisfied: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    /// Short title used in the navigation submenu.
    pub short_title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub category: &'static str,
    pub status: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub category: &'static str,
    pub technologies: &'static [Technology],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Soo Ji Dano",
    title: "Cloud System Architect & SaaS Integration Specialist",
    tagline: "Designing scalable cloud-native architectures, orchestrating microservices, and integrating AI-driven intelligence for enterprise solutions.",
    bio: "With over 8 years of experience in cloud architecture and enterprise system integration, I specialize in building scalable, resilient infrastructure that powers modern businesses. My expertise spans from Kubernetes orchestration to AI-powered microservices, delivering solutions that bridge the gap between complex enterprise requirements and cutting-edge technology.",
    experience: "8+ years",
    projects_completed: "50+",
    clients_satisfied: "25+",
    email: "soojidano@gmail.com",
    location: "Manila, PH",
    availability: "Available for consulting",
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "github.com/vitrixlab",
        href: "https://github.com/vitrixLab",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "linkedin.com/in/jasondano",
        href: "https://linkedin.com/in/jasondano",
        icon: "devicon-linkedin-plain",
    },
];

const TECH_REPOS: &[(&str, &str)] = &[
    ("Kubernetes", "https://github.com/vitrixLab/kubernetes"),
    ("Docker", "https://github.com/vitrixLab/docker"),
    ("SAP", "https://github.com/vitrixLab/SAP"),
    ("Azure", "https://github.com/vitrixLab/Azure"),
    ("Terraform", "https://github.com/vitrixLab/Azure-Terraform"),
    ("NodeJS", "https://github.com/vitrixLab/Node.js"),
    ("Python", "https://github.com/vitrixLab/cpython"),
    ("LLM", "https://github.com/vitrixLab/MCP-Server-LLM"),
    ("PostgreSQL", "https://github.com/vitrixLab/Supabase-PostgreSQL"),
    ("Jenkins", "https://github.com/vitrixLab/jenkins"),
    ("Helm", "https://github.com/vitrixLab/helm"),
    ("AWS", "https://github.com/vitrixLab/aws-sam-cli"),
    ("Prometheus", "https://github.com/vitrixLab/prometheus"),
    ("Apache_Kafka", "https://github.com/vitrixLab/kafka"),
    ("Apache_Spark", "https://github.com/vitrixLab/spark"),
    ("ElasticSearch", "https://github.com/vitrixLab/elasticsearch"),
    ("React", "https://github.com/vitrixLab/react"),
    ("MongoDB", "https://github.com/vitrixLab/mongoDB"),
];

/// Letters and digits only, lowercased, so "Node.js", "NodeJS" and "nodejs"
/// all name the same technology.
fn tech_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Repository link for a technology badge, if there is one.
pub fn tech_url(name: &str) -> Option<&'static str> {
    let key = tech_key(name);
    TECH_REPOS
        .iter()
        .find(|(tech, _)| tech_key(tech) == key)
        .map(|(_, url)| *url)
}

/// Badge text. Table keys use underscores where display names have spaces.
pub fn tech_label(name: &str) -> String {
    name.replace('_', " ")
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Enterprise ERP Cloud Migration",
        short_title: "ERP Cloud Migration",
        summary: "SAP S/4HANA migration for Fortune 500, cutting costs 40% and boosting performance 3×.",
        description: "Architected and deployed SAP S/4HANA cloud migration for Fortune 500 company, reducing operational costs by 40% and improving system performance by 3x.",
        tech_stack: &["Kubernetes", "Docker", "SAP", "Azure", "Terraform"],
        category: "Cloud Architecture",
        status: "Ongoing",
        duration: "8 months",
        highlights: &[
            "Zero-downtime migration strategy",
            "Implemented microservices architecture",
            "Automated CI/CD pipeline with 99.9% uptime",
        ],
    },
    Project {
        id: 2,
        title: "AI-Powered Microservices Platform",
        short_title: "AI Microservices Platform",
        summary: "SaaS platform pairing local LLMs with cloud infrastructure, 500K+ daily requests under 200ms.",
        description: "Built scalable SaaS platform integrating local LLMs with cloud infrastructure, serving 500K+ daily API requests with sub-200ms response times.",
        tech_stack: &["Node.js", "Python", "LLM", "Kubernetes", "PostgreSQL"],
        category: "AI Integration",
        status: "Live Production",
        duration: "12 months",
        highlights: &[
            "Local LLM evaluation pipeline",
            "SLM optimization for native code",
            "Auto-scaling microservices architecture",
        ],
    },
    Project {
        id: 3,
        title: "Multi-Cloud DevOps Pipeline",
        short_title: "Multi-Cloud DevOps",
        summary: "Hybrid AWS, Azure and GCP infrastructure behind one CI/CD pipeline with 95% deployment success.",
        description: "Designed hybrid cloud infrastructure spanning AWS, Azure, and GCP with unified CI/CD pipeline, achieving 95% deployment success rate.",
        tech_stack: &["Jenkins", "Helm", "Docker", "AWS", "Prometheus"],
        category: "DevOps",
        status: "Ongoing",
        duration: "6 months",
        highlights: &[
            "Cross-cloud service mesh implementation",
            "Automated infrastructure provisioning",
            "Real-time monitoring and alerting",
        ],
    },
    Project {
        id: 4,
        title: "Business Intelligence Integration Suite",
        short_title: "BI Integration Suite",
        summary: "Unified BI platform joining ERP, CRM and legacy data for real-time analytics.",
        description: "Developed unified BI platform connecting disparate data sources across ERP, CRM, and legacy systems for real-time analytics and reporting.",
        tech_stack: &["Apache_Kafka", "Apache_Spark", "ElasticSearch", "React", "MongoDB"],
        category: "Data Architecture",
        status: "Beta Testing",
        duration: "10 months",
        highlights: &[
            "Real-time data streaming pipeline",
            "Advanced analytics dashboard",
            "Machine learning-powered insights",
        ],
    },
];

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        category: "Cloud & Container Orchestration",
        technologies: &[
            Technology { name: "Kubernetes", icon: "⚙️", description: "Container orchestration and cluster management" },
            Technology { name: "Docker", icon: "📦", description: "Containerization and microservices deployment" },
            Technology { name: "Helm", icon: "⎈", description: "Kubernetes package management" },
            Technology { name: "AWS/Azure/GCP", icon: "☁️", description: "Multi-cloud infrastructure management" },
        ],
    },
    TechCategory {
        category: "Enterprise Integration",
        technologies: &[
            Technology { name: "SAP S/4HANA", icon: "🏢", description: "Enterprise resource planning systems" },
            Technology { name: "ERP Integration", icon: "🔗", description: "Cross-platform enterprise system connectivity" },
            Technology { name: "Business Intelligence", icon: "📊", description: "Data analytics and reporting platforms" },
            Technology { name: "API Gateway", icon: "🌐", description: "Microservices communication hub" },
        ],
    },
    TechCategory {
        category: "AI & Machine Learning",
        technologies: &[
            Technology { name: "Local LLM", icon: "🤖", description: "On-premise large language model deployment" },
            Technology { name: "Cloud LLM", icon: "🧠", description: "Cloud-based AI model integration" },
            Technology { name: "SLM Optimization", icon: "⚡", description: "Small language model for edge computing" },
            Technology { name: "ML Pipelines", icon: "🔄", description: "Automated machine learning workflows" },
        ],
    },
    TechCategory {
        category: "Architecture & Development",
        technologies: &[
            Technology { name: "MVC Architecture", icon: "🏗️", description: "Scalable application design patterns" },
            Technology { name: "Microservices", icon: "🔧", description: "Distributed system architecture" },
            Technology { name: "SaaS Platforms", icon: "💼", description: "Software as a Service development" },
            Technology { name: "CI/CD Pipelines", icon: "🚀", description: "Continuous integration and deployment" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tech_url_normalizes_spelling() {
        assert_eq!(tech_url("Node.js"), Some("https://github.com/vitrixLab/Node.js"));
        assert_eq!(tech_url("nodejs"), Some("https://github.com/vitrixLab/Node.js"));
        assert_eq!(tech_url("Apache Kafka"), Some("https://github.com/vitrixLab/kafka"));
        assert_eq!(tech_url("Cobol"), None);
        assert_eq!(tech_url(""), None);
    }

    #[test]
    fn test_every_project_badge_links() {
        for project in PROJECTS {
            for tech in project.tech_stack {
                assert!(tech_url(tech).is_some(), "{} has no link for {tech}", project.title);
            }
        }
    }

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_tech_label() {
        assert_eq!(tech_label("Apache_Spark"), "Apache Spark");
        assert_eq!(tech_label("Docker"), "Docker");
    }

    #[test]
    fn test_tech_stack_shape() {
        assert_eq!(TECH_STACK.len(), 4);
        assert!(TECH_STACK.iter().all(|c| c.technologies.len() == 4));
    }
}
