use super::*;

pub(super) static EN: Translations = Translations {
    common: Common {
        live_demo: "Live demo",
        intern: "Internship",
        work_together: "Work together",
    },
    nav: Nav {
        projects: "Projects",
        skills: "Skills",
        experience: "Experience",
        education: "Education",
        contact: "Contact",
    },
    hero: Hero {
        badge: "Web Developer",
        title: "Profile",
        lead: "Front-end & UX/UI developer based in Montreal. I build clean, fast and accessible interfaces using Vue/React on the front and Laravel on the back.",
        pitch: "Component-driven, responsive-first, with attention to performance and accessibility (WCAG).",
    },
    cta: Cta {
        view_projects: "View projects",
        contact: "Contact me",
        resume: "Resume / CV",
    },
    sections: Sections {
        projects: "Selected Projects",
        projects_sub: "A short, impact-focused selection.",
        skills: "Skills",
        skills_sub: "Core tech and daily tooling.",
        experience: "Experience",
        experience_sub: "Recent Agile environment.",
        education: "Education",
        education_sub: "College-level program in web development.",
        contact: "Contact",
        contact_sub: "Let’s discuss your project or front-end integration needs.",
        resume: "Resume / CV",
    },
    features: Features {
        booking: "Booking system (packages, pre-event cancellations)",
        roles: "Role-based access (admins / clients)",
        dashboard: "Admin dashboard",
        analytics: "Google Analytics integration",
        map: "Interactive map",
        responsive: "Responsive design",
        form: "Contact form",
        menu: "Integrated menu",
    },
    projects: ProjectTexts {
        festival: ProjectText {
            title: "5:7 Film Festival — Full-stack Platform",
            role: "Full-Stack",
            desc: "Reservation platform with roles and analytics; polished responsive UI.",
        },
        g6: ProjectText {
            title: "Resto Pub G6 — Responsive showcase website",
            role: "Front-End / Integration",
            desc: "Modern showcase site with interactive map, contact form, and integrated menu.",
        },
    },
    skills: SkillLabels {
        front: "Front-end",
        back: "Back-end",
        tools: "Tooling & Methods",
        ci: "basic CI",
    },
    exp: ExperienceText {
        period: "Oct 2024 – Dec 2024",
        item1: "Integrated responsive mockups (Laravel + Bootstrap) with reusable components.",
        item2: "Worked in Agile (Jira): sprints, reviews, task tracking and team collaboration.",
        item3: "Improved mobile UX (readability, performance, touch interactions).",
    },
    edu: EducationText {
        program: "AEC — Web Design & Programming",
        details: "Coursework across HTML/CSS/JS, PHP/Laravel, UX/UI, integration and Agile methods.",
    },
    resume: ResumeText {
        note: "Click “Resume / CV” to download the PDF version.",
    },
    footer: FooterText {
        made: "Built in Rust with Leptos and Tailwind.",
    },
    chrome: Chrome {
        site_title: "Wanil Parfait — Front-End & UX/UI Developer",
        toggle_theme: "Toggle theme",
        language_picker: "Language",
        crash_title: "Something went wrong",
        crash_message: "This page could not be displayed correctly.",
        reload: "Reload page",
    },
};
