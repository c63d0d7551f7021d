use super::*;

pub(super) static FR: Translations = Translations {
    common: Common {
        live_demo: "Voir le site",
        intern: "Stage",
        work_together: "Travaillons ensemble",
    },
    nav: Nav {
        projects: "Projets",
        skills: "Compétences",
        experience: "Expérience",
        education: "Études",
        contact: "Contact",
    },
    hero: Hero {
        badge: "Développeur Web",
        title: "Profil",
        lead: "Développeur front-end & UX/UI basé à Montréal. J'adore créer des interfaces propres, rapides et accessibles, avec Vue/React côté front et Laravel côté back.",
        pitch: "Approche composant, responsive first, souci de la performance et de l’accessibilité (WCAG).",
    },
    cta: Cta {
        view_projects: "Voir mes projets",
        contact: "Me contacter",
        resume: "CV / Résumé",
    },
    sections: Sections {
        projects: "Projets sélectionnés",
        projects_sub: "Une sélection courte, orientée résultat.",
        skills: "Compétences",
        skills_sub: "Techniques principales et outils de travail.",
        experience: "Expérience",
        experience_sub: "Dernière expérience en environnement Agile.",
        education: "Études",
        education_sub: "Formation collégiale en développement web.",
        contact: "Contact",
        contact_sub: "Discutons de votre projet ou de votre besoin d’intégration front-end.",
        resume: "CV / Résumé",
    },
    features: Features {
        booking: "Système de réservations (forfaits, annulation avant évènement)",
        roles: "Gestion des rôles (admin / clients)",
        dashboard: "Dashboard d’administration",
        analytics: "Intégration Google Analytics",
        map: "Carte interactive",
        responsive: "Design responsive",
        form: "Formulaire de contact",
        menu: "Menu intégré",
    },
    projects: ProjectTexts {
        festival: ProjectText {
            title: "5:7 Festival de Films — Plateforme Full-Stack",
            role: "Full-Stack",
            desc: "Plateforme de réservations avec rôles et analytics; interface responsive soignée.",
        },
        g6: ProjectText {
            title: "Resto Pub G6 — Site vitrine responsive",
            role: "Front-End / Intégration",
            desc: "Site vitrine moderne avec carte interactive, formulaire et menu intégré.",
        },
    },
    skills: SkillLabels {
        front: "Front-end",
        back: "Back-end",
        tools: "Outils & Méthodo",
        ci: "CI (basique)",
    },
    exp: ExperienceText {
        period: "Oct 2024 – Déc 2024",
        item1: "Intégration de maquettes responsives (Laravel + Bootstrap) avec composants réutilisables.",
        item2: "Travail en Agile (Jira) : sprints, revues, suivi des tâches et collaboration d’équipe.",
        item3: "Amélioration de l’UX mobile (lisibilité, performance, interactions tactiles).",
    },
    edu: EducationText {
        program: "AEC — Conception & Programmation de Sites Web",
        details: "Cours complets en HTML/CSS/JS, PHP/Laravel, UX/UI, intégration et méthodo Agile.",
    },
    resume: ResumeText {
        note: "Clique sur “CV / Résumé” pour télécharger la version PDF.",
    },
    footer: FooterText {
        made: "Conçu en Rust avec Leptos et Tailwind.",
    },
    chrome: Chrome {
        site_title: "Wanil Parfait — Développeur Front-End & UX/UI",
        toggle_theme: "Changer de thème",
        language_picker: "Langue",
        crash_title: "Un problème est survenu",
        crash_message: "Cette page n’a pas pu s’afficher correctement.",
        reload: "Recharger la page",
    },
};
