//! Bilingual copy. Every string the site shows comes from the typed tables
//! at the bottom of this file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }

    /// Accepts BCP 47 tags such as `es-CO`; anything not Spanish is English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("es") {
            Lang::Es
        } else {
            Lang::En
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub es: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(es: &'static str, en: &'static str) -> Self {
        Self { es, en }
    }

    pub const fn same(text: &'static str) -> Self {
        Self { es: text, en: text }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Es => self.es,
            Lang::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedList {
    pub es: &'static [&'static str],
    pub en: &'static [&'static str],
}

impl LocalizedList {
    pub fn get(&self, lang: Lang) -> &'static [&'static str] {
        match lang {
            Lang::Es => self.es,
            Lang::En => self.en,
        }
    }
}

pub struct Strings {
    pub site: SiteStrings,
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub stack: StackStrings,
    pub projects: ProjectsStrings,
    pub project: ProjectStrings,
    pub media: MediaStrings,
    pub contact: ContactStrings,
}

pub struct SiteStrings {
    pub brand: &'static str,
    pub change_language: &'static str,
    pub toggle_theme: &'static str,
    pub built: &'static str,
}

pub struct NavStrings {
    pub projects: &'static str,
    pub contact: &'static str,
}

pub struct HeroStrings {
    pub badge: &'static str,
    pub micro_proof: &'static str,
    pub headline_a: &'static str,
    pub headline_accent: &'static str,
    pub headline_b: &'static str,
    pub subtitle: &'static str,
    pub highlights: [&'static str; 3],
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub card_title: &'static str,
    pub card_tag: &'static str,
    pub card_bullets: [&'static str; 3],
    pub card_metric_label: &'static str,
    pub card_metric_value: &'static str,
    pub scroll: &'static str,
}

pub struct StackStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub backend: &'static str,
    pub data: &'static str,
    pub security: &'static str,
    pub observability: &'static str,
    pub infra: &'static str,
    pub frontend: &'static str,
}

pub struct ProjectsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub filter_all: &'static str,
    pub filter_backend: &'static str,
    pub filter_fullstack: &'static str,
    pub featured: &'static str,
    pub in_progress: &'static str,
}

pub struct ProjectStrings {
    pub back: &'static str,
    pub back_home: &'static str,
    pub not_found: &'static str,
    pub coming_soon: &'static str,
    pub section: &'static str,
    pub stack: &'static str,
    pub links: &'static str,
    pub metrics: &'static str,
    pub role: &'static str,
}

pub struct MediaStrings {
    pub load_video: &'static str,
    pub load_demo: &'static str,
}

pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub mail_subject: &'static str,
    pub cta_email: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub copy_fallback: &'static str,
    pub quick_title: &'static str,
    pub quick: [&'static str; 3],
    pub email_label: &'static str,
    pub links_title: &'static str,
    pub links_body: &'static str,
    pub linkedin: &'static str,
    pub linkedin_hint: &'static str,
    pub github: &'static str,
    pub github_hint: &'static str,
    pub resume: &'static str,
    pub resume_hint: &'static str,
    pub footer_note: &'static str,
}

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::Es => &ES,
        Lang::En => &EN,
    }
}

static ES: Strings = Strings {
    site: SiteStrings {
        brand: "Nicolás Guevara",
        change_language: "Cambiar idioma",
        toggle_theme: "Cambiar tema",
        built: "Compilado el",
    },
    nav: NavStrings {
        projects: "Proyectos",
        contact: "Contacto",
    },
    hero: HeroStrings {
        badge: "Disponible para proyectos",
        micro_proof: "Respuesta en menos de 24 h",
        headline_a: "Construyo sistemas",
        headline_accent: "robustos",
        headline_b: "backend en Java y full-stack",
        subtitle: "Portafolio de proyectos enfocados en APIs, arquitectura limpia, microservicios cuando aplica y entregas con impacto medible.",
        highlights: [
            "Arquitectura limpia",
            "Seguridad desde el diseño",
            "Observabilidad",
        ],
        cta_primary: "Ver proyectos",
        cta_secondary: "Contactarme",
        card_title: "Resumen rápido",
        card_tag: "backend-first",
        card_bullets: [
            "Diseño de dominios y APIs REST claras",
            "Integraciones, eventos y microservicios",
            "Métricas, logs y pruebas para producción",
        ],
        card_metric_label: "Enfoque",
        card_metric_value: "Backend & Arquitectura",
        scroll: "Desliza para ver más",
    },
    stack: StackStrings {
        title: "Stack técnico",
        subtitle: "Herramientas con las que construyo, aseguro y opero sistemas.",
        backend: "Backend",
        data: "Datos",
        security: "Seguridad",
        observability: "Observabilidad",
        infra: "Infraestructura",
        frontend: "Frontend",
    },
    projects: ProjectsStrings {
        title: "Proyectos",
        subtitle: "Selección curada de proyectos full-stack con fortaleza en backend (Java, APIs, arquitectura).",
        filter_all: "Todos",
        filter_backend: "Backend",
        filter_fullstack: "Full-stack",
        featured: "Destacado",
        in_progress: "En desarrollo",
    },
    project: ProjectStrings {
        back: "Volver a proyectos",
        back_home: "Volver al inicio",
        not_found: "No encontré este proyecto.",
        coming_soon: "Este proyecto está en desarrollo. Pronto publicaré más detalles.",
        section: "sección",
        stack: "Stack",
        links: "Enlaces",
        metrics: "Métricas",
        role: "Mi rol",
    },
    media: MediaStrings {
        load_video: "Cargar video",
        load_demo: "Cargar demo",
    },
    contact: ContactStrings {
        title: "Hablemos",
        subtitle: "¿Tienes una oportunidad, proyecto o idea? Escríbeme y te respondo lo más pronto posible.",
        mail_subject: "Contacto desde tu portafolio",
        cta_email: "Enviar email",
        copy: "Copiar email",
        copied: "Copiado",
        copy_fallback: "Copia este email:",
        quick_title: "Info rápida",
        quick: [
            "Disponible para proyectos freelance y roles full-time.",
            "Interesado en backend, full-stack y arquitectura.",
            "Trabajo remoto o híbrido.",
        ],
        email_label: "Email",
        links_title: "Links",
        links_body: "Encuéntrame aquí (o descarga mi CV).",
        linkedin: "LinkedIn",
        linkedin_hint: "Experiencia y background",
        github: "GitHub",
        github_hint: "Código y repositorios",
        resume: "CV / Resume",
        resume_hint: "PDF (una página)",
        footer_note: "Tip: si me escribes, incluye contexto y links para responder más rápido.",
    },
};

static EN: Strings = Strings {
    site: SiteStrings {
        brand: "Nicolás Guevara",
        change_language: "Change language",
        toggle_theme: "Toggle theme",
        built: "Built on",
    },
    nav: NavStrings {
        projects: "Projects",
        contact: "Contact",
    },
    hero: HeroStrings {
        badge: "Open to projects",
        micro_proof: "Replies within 24 h",
        headline_a: "I build",
        headline_accent: "robust",
        headline_b: "Java backends and full-stack apps",
        subtitle: "Portfolio focused on APIs, clean architecture, microservices when needed, and shipping with measurable impact.",
        highlights: ["Clean architecture", "Security by design", "Observability"],
        cta_primary: "View projects",
        cta_secondary: "Contact me",
        card_title: "Quick snapshot",
        card_tag: "backend-first",
        card_bullets: [
            "Domain design and clear REST APIs",
            "Integrations, events and microservices",
            "Metrics, logs and tests for production",
        ],
        card_metric_label: "Focus",
        card_metric_value: "Backend & Architecture",
        scroll: "Scroll to explore",
    },
    stack: StackStrings {
        title: "Tech stack",
        subtitle: "Tools I use to build, secure, and operate systems.",
        backend: "Backend",
        data: "Data",
        security: "Security",
        observability: "Observability",
        infra: "Infrastructure",
        frontend: "Frontend",
    },
    projects: ProjectsStrings {
        title: "Projects",
        subtitle: "A curated selection of full-stack projects with strong backend focus (Java, APIs, architecture).",
        filter_all: "All",
        filter_backend: "Backend",
        filter_fullstack: "Full-stack",
        featured: "Featured",
        in_progress: "In progress",
    },
    project: ProjectStrings {
        back: "Back to projects",
        back_home: "Back home",
        not_found: "Project not found.",
        coming_soon: "This project is in progress. More details coming soon.",
        section: "section",
        stack: "Stack",
        links: "Links",
        metrics: "Metrics",
        role: "My role",
    },
    media: MediaStrings {
        load_video: "Load video",
        load_demo: "Load demo",
    },
    contact: ContactStrings {
        title: "Let’s connect",
        subtitle: "Got an opportunity, project, or idea? Email me and I’ll get back to you soon.",
        mail_subject: "Contact from your portfolio",
        cta_email: "Send email",
        copy: "Copy email",
        copied: "Copied",
        copy_fallback: "Copy this email:",
        quick_title: "Quick info",
        quick: [
            "Available for freelance projects and full-time roles.",
            "Interested in backend, full-stack, and architecture.",
            "Remote or hybrid.",
        ],
        email_label: "Email",
        links_title: "Links",
        links_body: "Find me here (or download my resume).",
        linkedin: "LinkedIn",
        linkedin_hint: "Experience & background",
        github: "GitHub",
        github_hint: "Code & repositories",
        resume: "CV / Resume",
        resume_hint: "PDF (one page)",
        footer_note: "Tip: include context and links so I can respond faster.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_tags() {
        assert_eq!(Lang::from_tag("es"), Lang::Es);
        assert_eq!(Lang::from_tag("es-CO"), Lang::Es);
        assert_eq!(Lang::from_tag("ES"), Lang::Es);
        assert_eq!(Lang::from_tag("en-US"), Lang::En);
        assert_eq!(Lang::from_tag("fr"), Lang::En);
        assert_eq!(Lang::default(), Lang::Es);
        assert_eq!(Lang::Es.toggled().toggled(), Lang::Es);
    }

    #[test]
    fn test_tables_are_distinct() {
        let es = strings(Lang::Es);
        let en = strings(Lang::En);
        assert_eq!(es.nav.projects, "Proyectos");
        assert_eq!(en.nav.projects, "Projects");
        assert_eq!(es.site.brand, en.site.brand);
        assert_ne!(es.contact.mail_subject, en.contact.mail_subject);
    }

    #[test]
    fn test_localized_lookup() {
        let text = Localized::new("Hola", "Hello");
        assert_eq!(text.get(Lang::Es), "Hola");
        assert_eq!(text.get(Lang::En), "Hello");
        assert_eq!(Localized::same("React").get(Lang::En), "React");
    }
}
