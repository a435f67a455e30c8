//! Static page content

pub struct Skill {
    pub name: &'static str,
    /// 0-100
    pub level: u8,
    pub category: &'static str,
}

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub struct Portfolio {
    pub name: &'static str,
    pub title: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub skills: &'static [Skill],
    pub experience: &'static [Experience],
}

pub const PORTFOLIO: Portfolio = Portfolio {
    name: "Saron",
    title: "Web Developer & Administrator",
    about: "I am a detail-oriented professional combining technical web development skills \
            with robust administrative experience. Currently based in Singapore, I specialize \
            in building clean, responsive interfaces using HTML, CSS, and JavaScript, while \
            maintaining high standards in Quality M&E administration.",
    email: "saronraj03@gmail.com",
    location: "Singapore",
    skills: &[
        Skill { name: "HTML5", level: 95, category: "Frontend" },
        Skill { name: "CSS3", level: 90, category: "Frontend" },
        Skill { name: "JavaScript", level: 85, category: "Frontend" },
        Skill { name: "Administration", level: 90, category: "Admin" },
        Skill { name: "Quality Assurance", level: 85, category: "Admin" },
        Skill { name: "Microsoft Office", level: 80, category: "Admin" },
    ],
    experience: &[
        Experience {
            role: "Admin",
            company: "Quality M&E pte ltd",
            period: "2025 - Present",
            description: "Handling administrative tasks, quality monitoring, and evaluation processes in Singapore.",
        },
        Experience {
            role: "Process Associate",
            company: "SCYO Decision services pvt ltd",
            period: "2023 - 2025",
            description: "Managed process workflows and decision support services in Chennai.",
        },
    ],
};
