use crate::models::program::{Category, Program};

struct ProgramSeed {
    key: &'static str,
    name: &'static str,
    college: &'static str,
    description: &'static str,
    careers: [&'static str; 5],
    icon: &'static str,
    url: &'static str,
    keywords: [&'static str; 7],
    degree_type: &'static str,
}

impl ProgramSeed {
    fn build(&self) -> Program {
        Program {
            key: self.key.to_string(),
            name: self.name.to_string(),
            college: self.college.to_string(),
            description: self.description.to_string(),
            careers: self.careers.iter().map(|c| c.to_string()).collect(),
            icon: self.icon.to_string(),
            url: self.url.to_string(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            degree_type: self.degree_type.to_string(),
        }
    }
}

const PROGRAM_SEEDS: &[ProgramSeed] = &[
    ProgramSeed {
        key: "computer-science",
        name: "Bachelor of Science in Computer Science",
        college: "College of Arts and Sciences",
        description: "Focus on algorithms, software development, AI, and problem-solving through hands-on learning including software engineering, web development, operating systems and networking.",
        careers: ["Software Developer", "AI Engineer", "Data Scientist", "Web Developer", "Systems Engineer"],
        icon: "💻",
        url: "https://pu.edu.lb/bachelor-science-computer-science",
        keywords: ["technology", "programming", "problem-solving", "innovation", "analytical", "logical", "digital"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "business-administration",
        name: "Bachelor of Business Administration",
        college: "College of Business",
        description: "Comprehensive business education with concentrations in Accounting & Finance, Marketing & Entrepreneurship, Operations & Human Capital Management.",
        careers: ["Business Manager", "Marketing Specialist", "Financial Analyst", "Entrepreneur", "Operations Manager"],
        icon: "📊",
        url: "https://pu.edu.lb/bachelor-business-administration",
        keywords: ["leadership", "business", "management", "entrepreneurship", "communication", "strategic", "finance"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "architecture",
        name: "Bachelor of Architecture",
        college: "College of Architecture and Design",
        description: "Comprehensive design education covering structural principles, design theory, architectural history, construction techniques, and visual representation.",
        careers: ["Architect", "Urban Planner", "Design Consultant", "Construction Manager", "Interior Designer"],
        icon: "🏗️",
        url: "https://pu.edu.lb/bachelor-architecture",
        keywords: ["creative", "design", "spatial", "artistic", "technical", "visual", "construction"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "nursing",
        name: "Bachelor of Science in Nursing",
        college: "College of Public Health",
        description: "Professional healthcare education preparing compassionate and skilled nursing professionals for modern healthcare environments.",
        careers: ["Registered Nurse", "Healthcare Manager", "Public Health Specialist", "Clinical Researcher", "Nurse Practitioner"],
        icon: "🏥",
        url: "https://pu.edu.lb/bachelor-science-nursing-program",
        keywords: ["helping", "healthcare", "compassionate", "science", "people-oriented", "medical", "caring"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "civil-engineering",
        name: "Bachelor of Engineering in Civil and Environmental Engineering",
        college: "College of Engineering",
        description: "Engineering solutions for infrastructure, construction, and environmental challenges with focus on sustainable development.",
        careers: ["Civil Engineer", "Environmental Engineer", "Project Manager", "Construction Engineer", "Infrastructure Specialist"],
        icon: "🌉",
        url: "https://pu.edu.lb/bachelor-engineering-civil-and-environmental-engineering",
        keywords: ["building", "infrastructure", "environmental", "technical", "problem-solving", "construction", "engineering"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "electrical-engineering",
        name: "Bachelor of Engineering in Electrical and Communication Engineering",
        college: "College of Engineering",
        description: "Focus on electrical systems, telecommunications, and communication technologies for the digital age.",
        careers: ["Electrical Engineer", "Telecommunications Engineer", "Systems Engineer", "Technology Consultant", "Network Engineer"],
        icon: "⚡",
        url: "https://pu.edu.lb/bachelor-engineering-electrical-and-communication-engineering",
        keywords: ["technology", "electrical", "communication", "systems", "innovation", "digital", "engineering"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "mechanical-engineering",
        name: "Bachelor of Engineering in Mechanical Engineering",
        college: "College of Engineering",
        description: "Design and development of mechanical systems, machines, and manufacturing processes with hands-on learning approach.",
        careers: ["Mechanical Engineer", "Manufacturing Engineer", "Product Designer", "Automotive Engineer", "Quality Engineer"],
        icon: "⚙️",
        url: "https://pu.edu.lb/bachelor-engineering-mechanical-engineering",
        keywords: ["mechanical", "design", "manufacturing", "technical", "hands-on", "engineering", "innovation"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "petroleum-engineering",
        name: "Bachelor of Engineering in Petroleum Engineering",
        college: "College of Engineering",
        description: "Specialized training in oil and gas exploration, extraction, and production technologies for the energy sector.",
        careers: ["Petroleum Engineer", "Reservoir Engineer", "Drilling Engineer", "Energy Consultant", "Production Engineer"],
        icon: "🛢️",
        url: "https://pu.edu.lb/bachelor-engineering-petroleum-engineering",
        keywords: ["energy", "technical", "analytical", "specialized", "industry", "engineering", "resources"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "public-health",
        name: "Bachelor of Science in Public Health",
        college: "College of Public Health",
        description: "Focus on community health, disease prevention, healthcare policy and management for population wellness.",
        careers: ["Public Health Specialist", "Health Policy Analyst", "Community Health Worker", "Epidemiologist", "Health Educator"],
        icon: "🌍",
        url: "https://pu.edu.lb/bachelor-science-public-health",
        keywords: ["community", "health", "helping", "research", "policy", "prevention", "social"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "communication",
        name: "Bachelor of Arts in Communication and Social Media",
        college: "College of Arts and Sciences",
        description: "Modern communication strategies, digital media, and social media management for the connected world.",
        careers: ["Social Media Manager", "Communications Specialist", "Digital Marketer", "Content Creator", "Public Relations Manager"],
        icon: "📱",
        url: "https://pu.edu.lb/bachelor-arts-communication-and-social-media",
        keywords: ["creative", "communication", "media", "social", "digital", "marketing", "content"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "speech-therapy",
        name: "Bachelor of Arts in Speech Therapy",
        college: "College of Arts and Sciences",
        description: "Specialized training in speech and language disorders, therapeutic interventions for communication improvement.",
        careers: ["Speech Therapist", "Language Pathologist", "Rehabilitation Specialist", "Clinical Therapist", "Special Education Teacher"],
        icon: "🗣️",
        url: "https://pu.edu.lb/bachelor-arts-speech-therapy",
        keywords: ["helping", "healthcare", "communication", "therapy", "people-oriented", "medical", "rehabilitation"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "law",
        name: "Bachelor of Laws",
        college: "College of Law and Political Science",
        description: "Comprehensive legal education covering civil, commercial, and international law with critical thinking focus.",
        careers: ["Lawyer", "Legal Consultant", "Judge", "Legal Researcher", "Corporate Counsel"],
        icon: "⚖️",
        url: "https://pu.edu.lb/bachelor-law",
        keywords: ["analytical", "justice", "communication", "research", "advocacy", "logical", "debate"],
        degree_type: "Bachelor",
    },
    ProgramSeed {
        key: "mba",
        name: "Master of Business Administration",
        college: "College of Business",
        description: "Advanced business leadership and management education for experienced professionals seeking executive roles.",
        careers: ["Executive Manager", "Business Consultant", "CEO", "Strategic Planner", "Director"],
        icon: "🎓",
        url: "https://pu.edu.lb/master-business-administration",
        keywords: ["leadership", "advanced", "management", "strategic", "business", "executive", "professional"],
        degree_type: "Master",
    },
    ProgramSeed {
        key: "llm",
        name: "Master of Laws (LL.M.)",
        college: "College of Law and Political Science",
        description: "Advanced legal studies in commercial regulation, litigation, and arbitration for legal professionals.",
        careers: ["Senior Lawyer", "Legal Specialist", "Arbitrator", "Legal Academic", "International Law Expert"],
        icon: "📚",
        url: "https://pu.edu.lb/master-laws-llm-commercial-regulation-litigation-and-arbitration",
        keywords: ["advanced", "specialized", "legal", "research", "expert", "professional", "analytical"],
        degree_type: "Master",
    },
];

pub(super) fn seed_programs() -> Vec<Program> {
    PROGRAM_SEEDS.iter().map(ProgramSeed::build).collect()
}

const CATEGORY_SEEDS: &[(char, &str, &[&str], &str, &str)] = &[
    ('A', "Business Administration", &["Business Administration"], "💼", "College of Business"),
    ('B', "Communication & Media", &["Communication & Media"], "📱", "College of Arts & Sciences"),
    (
        'C',
        "Computer Science / Engineering",
        &["Computer Science", "Engineering"],
        "💻",
        "College of Engineering",
    ),
    ('D', "Architecture", &["Architecture"], "🏛️", "College of Architecture"),
    (
        'E',
        "Health Sciences",
        &["Nursing", "Public Health", "Speech Therapy"],
        "🏥",
        "College of Health Sciences",
    ),
    ('F', "Law", &["Law"], "⚖️", "College of Law"),
];

pub(super) fn seed_categories() -> Vec<Category> {
    CATEGORY_SEEDS
        .iter()
        .map(|(letter, name, programs, icon, college)| Category {
            letter: *letter,
            name: name.to_string(),
            programs: programs.iter().map(|p| p.to_string()).collect(),
            icon: icon.to_string(),
            college: college.to_string(),
        })
        .collect()
}
