use crate::i18n::{Localized, LocalizedList};
use crate::media::{VideoRef, VideoSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Backend,
    Fullstack,
}

impl Category {
    pub fn slug(self) -> &'static str {
        match self {
            Category::Backend => "backend",
            Category::Fullstack => "fullstack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => project.category == c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    Demo,
    Doc,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::GitHub => "GitHub",
            LinkKind::Demo => "Live",
            LinkKind::Doc => "Docs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: Localized,
    pub value: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Overview,
    Problem,
    Solution,
    Architecture,
    Features,
    Challenges,
    Results,
    Next,
}

impl SectionId {
    /// DOM id of the rendered section.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Problem => "problem",
            SectionId::Solution => "solution",
            SectionId::Architecture => "architecture",
            SectionId::Features => "features",
            SectionId::Challenges => "challenges",
            SectionId::Results => "results",
            SectionId::Next => "next",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSection {
    pub id: SectionId,
    pub title: Localized,
    pub body: Localized,
    pub bullets: Option<LocalizedList>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media {
    pub images: &'static [Image],
    pub videos: &'static [VideoRef],
}

impl Media {
    const NONE: Media = Media {
        images: &[],
        videos: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty()
    }

    /// Cover art for cards: the first image, if there is one.
    pub fn cover(&self) -> Option<&'static Image> {
        self.images.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub featured: bool,
    pub year: Option<&'static str>,
    pub category: Category,
    pub title: Localized,
    pub description: Localized,
    pub role: Option<Localized>,
    pub duration: Option<Localized>,
    pub stack: &'static [&'static str],
    pub links: &'static [ProjectLink],
    pub metrics: &'static [Metric],
    pub sections: &'static [ProjectSection],
    pub media: Media,
    pub coming_soon: bool,
    pub detail_enabled: bool,
}

impl Project {
    const BLANK: Project = Project {
        id: "",
        featured: false,
        year: None,
        category: Category::Fullstack,
        title: Localized::same(""),
        description: Localized::same(""),
        role: None,
        duration: None,
        stack: &[],
        links: &[],
        metrics: &[],
        sections: &[],
        media: Media::NONE,
        coming_soon: false,
        detail_enabled: true,
    };

    /// Whether the project has a detail page to link to.
    pub fn is_browsable(&self) -> bool {
        self.detail_enabled && !self.coming_soon
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.id)
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections
            .iter()
            .map(|s| s.id.anchor().to_string())
            .collect()
    }

    pub fn section(&self, anchor: &str) -> Option<&'static ProjectSection> {
        self.sections.iter().find(|s| s.id.anchor() == anchor)
    }

    /// Splits the stack into at most `max` chips and the number left over.
    pub fn stack_chips(&self, max: usize) -> (&'static [&'static str], usize) {
        let stack = self.stack;
        let shown = &stack[..stack.len().min(max)];
        (shown, stack.len() - shown.len())
    }
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Featured projects shown on top of the list, at most two.
pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).take(2).collect()
}

/// Non-featured projects matching `filter`, newest first. Ties keep their
/// declaration order.
pub fn listed_projects(filter: Filter) -> Vec<&'static Project> {
    let mut rest = PROJECTS
        .iter()
        .filter(|p| !p.featured && filter.matches(p))
        .collect::<Vec<_>>();
    rest.sort_by(|a, b| b.year.unwrap_or("").cmp(a.year.unwrap_or("")));
    rest
}

const fn github(href: &'static str) -> ProjectLink {
    ProjectLink {
        kind: LinkKind::GitHub,
        href,
    }
}

const fn demo(src: &'static str, es: &'static str, en: &'static str) -> VideoRef {
    VideoRef {
        source: VideoSource::File(src),
        title: Localized::new(es, en),
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "cinema-management-system",
        featured: true,
        year: Some("2025"),
        title: Localized::same("Cinema Management System"),
        description: Localized::new(
            "Sistema full-stack con 2 microservicios (Flask + Quarkus) y frontend en React. Enfocado en recorrer el ciclo completo de ingeniería de software y en testing (unitarias, estrés y aceptación).",
            "Full-stack system with 2 microservices (Flask + Quarkus) and a React frontend. Focused on the full software engineering lifecycle and testing (unit, stress, and acceptance).",
        ),
        role: Some(Localized::new(
            "Backend & full-stack (diseño de APIs, microservicios, testing, UI)",
            "Backend & full-stack (API design, microservices, testing, UI)",
        )),
        stack: &["Java (Quarkus)", "Python (Flask)", "React", "PostgreSQL", "Docker", "Testing", "CI/CD"],
        links: &[github("https://github.com/NicoG2023/Cinema-Management-System")],
        metrics: &[
            Metric {
                label: Localized::new("Arquitectura", "Architecture"),
                value: Localized::new("2 microservicios", "2 microservices"),
            },
            Metric {
                label: Localized::same("Testing"),
                value: Localized::same("Unit • Stress • Acceptance"),
            },
            Metric {
                label: Localized::same("UI"),
                value: Localized::same("React"),
            },
        ],
        media: Media {
            images: &[],
            videos: &[demo(
                "/videos/cinema/CinemaManagementSystem.mp4",
                "Demo del sistema",
                "System demo",
            )],
        },
        sections: &[
            ProjectSection {
                id: SectionId::Overview,
                title: Localized::new("Resumen", "Overview"),
                body: Localized::new(
                    "Sistema de gestión de cine construido end-to-end con arquitectura de microservicios y foco fuerte en calidad: diseño, implementación y pruebas en diferentes niveles.",
                    "Cinema management system built end-to-end with a microservices architecture and a strong quality focus: design, implementation, and multi-level testing.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Problem,
                title: Localized::new("Problema", "Problem"),
                body: Localized::new(
                    "Necesitaba un proyecto end-to-end que demostrara arquitectura, integración y calidad de software (más allá de solo “que funcione”).",
                    "Needed an end-to-end project that demonstrates architecture, integration, and software quality (beyond just “it works”).",
                ),
                bullets: Some(LocalizedList {
                    es: &["Integración entre servicios", "Flujos completos UI→API→DB", "Cobertura de pruebas realista"],
                    en: &["Service integration", "End-to-end UI→API→DB flows", "Realistic test coverage"],
                }),
            },
            ProjectSection {
                id: SectionId::Solution,
                title: Localized::new("Solución", "Solution"),
                body: Localized::new(
                    "Separé responsabilidades en microservicios, diseñé APIs claras y construí un frontend React para la operación del sistema, complementado con pruebas unitarias, de estrés y de aceptación.",
                    "Split responsibilities into microservices, designed clear APIs, and built a React frontend to operate the system, complemented by unit, stress, and acceptance tests.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Architecture,
                title: Localized::new("Arquitectura", "Architecture"),
                body: Localized::new(
                    "2 servicios (Flask + Quarkus) con endpoints definidos, persistencia y contratos claros; frontend React consumiendo APIs.",
                    "2 services (Flask + Quarkus) with defined endpoints, persistence, and clear contracts; React frontend consuming APIs.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Results,
                title: Localized::new("Resultados", "Results"),
                body: Localized::new(
                    "Sistema funcional con arquitectura separada y evidencia de calidad mediante pruebas unitarias, de estrés y de aceptación.",
                    "Working system with separated architecture and quality evidence through unit, stress, and acceptance tests.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Next,
                title: Localized::new("Siguientes pasos", "Next steps"),
                body: Localized::new(
                    "Hardening, observabilidad (métricas/logs) y despliegue reproducible (CI/CD).",
                    "Hardening, observability (metrics/logs), and reproducible deployment (CI/CD).",
                ),
                bullets: None,
            },
        ],
        ..Project::BLANK
    },
    Project {
        id: "probability-quizzes",
        featured: true,
        year: Some("2024–2025"),
        title: Localized::new(
            "App de Quices de Probabilidad (crear y calificar)",
            "Probability Quizzes App (create & grade)",
        ),
        description: Localized::new(
            "Aplicación full-stack en Quarkus + React para crear, presentar y calificar quices. Incluye autenticación/autorización con Keycloak.",
            "Full-stack app in Quarkus + React to create, take, and grade quizzes. Includes auth/authz with Keycloak.",
        ),
        role: Some(Localized::new(
            "Full-stack (backend Quarkus, UI React, auth con Keycloak)",
            "Full-stack (Quarkus backend, React UI, Keycloak auth)",
        )),
        stack: &["Java (Quarkus)", "React", "Keycloak", "PostgreSQL", "Docker"],
        links: &[github("https://github.com/NicoG2023/App-Quices-Probabilidad")],
        metrics: &[
            Metric {
                label: Localized::same("Auth"),
                value: Localized::same("Keycloak"),
            },
            Metric {
                label: Localized::new("Tipo", "Type"),
                value: Localized::same("Full-stack"),
            },
            Metric {
                label: Localized::new("Enfoque", "Focus"),
                value: Localized::new("Proyecto completo", "End-to-end build"),
            },
        ],
        media: Media {
            images: &[],
            videos: &[demo("/videos/quizzes/AppProbabilidad.mp4", "Demo de la app", "App demo")],
        },
        sections: &[
            ProjectSection {
                id: SectionId::Overview,
                title: Localized::new("Resumen", "Overview"),
                body: Localized::new(
                    "Plataforma para administrar quices, responderlos y calificarlos, con autenticación y roles para control de acceso.",
                    "Platform to manage quizzes, take them, and grade them, with authentication and roles for access control.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Features,
                title: Localized::new("Funcionalidades clave", "Key features"),
                body: Localized::new(
                    "Creación de quices, banca de preguntas, presentación a usuarios y calificación automática con resultados.",
                    "Quiz creation, question bank, user delivery, and automatic grading with results.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Architecture,
                title: Localized::new("Arquitectura", "Architecture"),
                body: Localized::new(
                    "API en Quarkus con endpoints REST y seguridad integrada con Keycloak; UI React consumiendo la API.",
                    "Quarkus REST API secured with Keycloak; React UI consuming the API.",
                ),
                bullets: None,
            },
        ],
        ..Project::BLANK
    },
    Project {
        id: "access-platform",
        year: Some("2025"),
        title: Localized::new(
            "Plataforma de control de acceso (Reconocimiento facial)",
            "Access Control Platform (Face Recognition)",
        ),
        description: Localized::new(
            "Plataforma full-stack en Quarkus + React: monolito modular + microservicio, decisiones por eventos con Kafka, seguridad con Keycloak y observabilidad con Prometheus, Grafana y Alertmanager.",
            "Full-stack platform in Quarkus + React: modular monolith + microservice, event-driven decisions with Kafka, security with Keycloak, and observability with Prometheus, Grafana, and Alertmanager.",
        ),
        coming_soon: true,
        detail_enabled: false,
        role: Some(Localized::new(
            "Full-stack (arquitectura, backend Quarkus, observabilidad, integración frontend)",
            "Full-stack (architecture, Quarkus backend, observability, frontend integration)",
        )),
        duration: Some(Localized::new("3 meses", "3 months")),
        stack: &[
            "Java (Quarkus)", "React", "Keycloak", "Kafka", "PostgreSQL", "Prometheus", "Grafana",
            "Alertmanager", "Docker", "CI/CD",
        ],
        metrics: &[
            Metric {
                label: Localized::new("Arquitectura", "Architecture"),
                value: Localized::new("Monolito modular + microservicio", "Modular monolith + microservice"),
            },
            Metric {
                label: Localized::new("Eventos", "Events"),
                value: Localized::same("Kafka (event-driven)"),
            },
            Metric {
                label: Localized::new("Observabilidad", "Observability"),
                value: Localized::same("Prometheus + Grafana + Alertmanager"),
            },
        ],
        media: Media {
            images: &[
                Image {
                    src: "/images/access-1.png",
                    alt: Localized::new("Pantalla principal", "Main screen"),
                },
                Image {
                    src: "/images/access-2.png",
                    alt: Localized::new("Historial de accesos", "Access history"),
                },
            ],
            videos: &[],
        },
        ..Project::BLANK
    },
    Project {
        id: "diagseg",
        year: Some("2025"),
        title: Localized::same("DiagSEG"),
        description: Localized::new(
            "Aplicación para evaluar riesgo de IPs y dominios usando reglas e integraciones con múltiples fuentes. Backend en Quarkus y frontend en Vue.",
            "App to assess risk for IPs and domains using rules and integrations with multiple sources. Quarkus backend and Vue frontend.",
        ),
        role: Some(Localized::new(
            "Backend (Quarkus) + Frontend (Vue) + integraciones",
            "Backend (Quarkus) + Frontend (Vue) + integrations",
        )),
        stack: &["Java (Quarkus)", "Vue", "PostgreSQL", "Docker", "Integrations"],
        links: &[github("https://github.com/EngJuanSER/ASNs-Security/tree/main/Proyect")],
        media: Media {
            images: &[],
            videos: &[demo("/videos/diagseg/DiagSeg.mp4", "Demo de DiagSEG", "DiagSEG demo")],
        },
        sections: &[
            ProjectSection {
                id: SectionId::Overview,
                title: Localized::new("Resumen", "Overview"),
                body: Localized::new(
                    "Proyecto orientado a seguridad: integra fuentes y reglas para calificar dominios/IPs y facilitar diagnóstico.",
                    "Security-oriented project: integrates sources and rules to score domains/IPs and support diagnosis.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Architecture,
                title: Localized::new("Arquitectura", "Architecture"),
                body: Localized::new(
                    "Backend en Quarkus que centraliza la lógica de scoring y persistencia; UI en Vue para consultar resultados e historial.",
                    "Quarkus backend centralizing scoring logic and persistence; Vue UI to browse results and history.",
                ),
                bullets: None,
            },
        ],
        ..Project::BLANK
    },
    Project {
        id: "ecommerce-artesanias",
        year: Some("2024"),
        title: Localized::new("E-commerce Artesanías", "Handicrafts E-commerce"),
        description: Localized::new(
            "Plataforma e-commerce con microservicios en Express, comunicación por eventos con Kafka y frontend en React.",
            "E-commerce platform with Express microservices, Kafka event-driven communication, and a React frontend.",
        ),
        role: Some(Localized::new(
            "Full-stack (microservicios, eventos, UI)",
            "Full-stack (microservices, events, UI)",
        )),
        stack: &["Node.js (Express)", "Kafka", "React", "PostgreSQL", "Docker"],
        links: &[github("https://github.com/NicoG2023/Artesanias_Bogota_Ltda")],
        media: Media {
            images: &[],
            videos: &[
                demo("/videos/artesanias/ArtesaniasBogota.mp4", "Demo general", "General demo"),
                demo(
                    "/videos/artesanias/ArtesaniasBogota-cliente.mp4",
                    "Video demo para caso cliente",
                    "Client flow demo video",
                ),
                demo(
                    "/videos/artesanias/ArtesaniasBogota-staff.mp4",
                    "Video demo para caso staff",
                    "Staff flow demo video",
                ),
            ],
        },
        sections: &[
            ProjectSection {
                id: SectionId::Architecture,
                title: Localized::new("Arquitectura", "Architecture"),
                body: Localized::new(
                    "Microservicios desacoplados con comunicación asíncrona (eventos Kafka) para flujos clave del negocio.",
                    "Decoupled microservices with asynchronous communication (Kafka events) for key business flows.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Results,
                title: Localized::new("Resultados", "Results"),
                body: Localized::new(
                    "Base escalable para catálogo/órdenes, integración entre servicios y UI React para el flujo de compra.",
                    "Scalable base for catalog/orders, service integration, and a React UI for the purchase flow.",
                ),
                bullets: None,
            },
        ],
        ..Project::BLANK
    },
    Project {
        id: "restaurant-app",
        year: Some("2024"),
        title: Localized::new("Aplicación Restaurante", "Restaurant App"),
        description: Localized::new(
            "Sistema en Django + React: clientes ordenan desde la app y el restaurante gestiona mesas, órdenes, empleados y operación.",
            "Django + React system: customers order in-app and the restaurant manages tables, orders, employees, and operations.",
        ),
        role: Some(Localized::new(
            "Full-stack (backend Django, UI React)",
            "Full-stack (Django backend, React UI)",
        )),
        stack: &["Python (Django)", "React", "PostgreSQL", "Docker"],
        links: &[github("https://github.com/NicoG2023/App-Restaurante")],
        media: Media {
            images: &[],
            videos: &[demo("/videos/Restaurante/AppRestaurante.mp4", "Demo del sistema", "System demo")],
        },
        sections: &[ProjectSection {
            id: SectionId::Features,
            title: Localized::new("Funcionalidades clave", "Key features"),
            body: Localized::new(
                "Órdenes, gestión de mesas, empleados, clientes y estados de servicio.",
                "Ordering flow, table management, staff and customer management, and service states.",
            ),
            bullets: None,
        }],
        ..Project::BLANK
    },
    Project {
        id: "academic-cli",
        year: Some("2022"),
        category: Category::Backend,
        title: Localized::new(
            "Sistema Académico CLI (C++ + estructuras desde cero)",
            "Academic CLI System (C++ + data structures from scratch)",
        ),
        description: Localized::new(
            "Sistema de gestión académica en C++ (CLI) construido sin librerías modernas: estructuras de datos implementadas desde cero. Usa un árbol AVL con multilistas para gestionar notas de forma eficiente.",
            "Academic management system in C++ (CLI) built without modern libraries: data structures implemented from scratch. Uses an AVL tree with multilists for efficient grade management.",
        ),
        role: Some(Localized::new(
            "Backend/algoritmos (diseño e implementación de estructuras de datos)",
            "Backend/algorithms (data structure design & implementation)",
        )),
        stack: &["C++ (legacy standard)", "CLI", "AVL Tree", "Multilists", "File I/O"],
        links: &[github("https://github.com/NicoG2023/Sistema-Academico-CLI")],
        media: Media {
            images: &[
                Image {
                    src: "/images/SistemaAcademico/SistemaAcademico1.png",
                    alt: Localized::new("Vista del sistema", "System view"),
                },
                Image {
                    src: "/images/SistemaAcademico/SistemaAcademico2.png",
                    alt: Localized::new("Menús y reportes", "Menus and reports"),
                },
            ],
            videos: &[],
        },
        sections: &[
            ProjectSection {
                id: SectionId::Overview,
                title: Localized::new("Resumen", "Overview"),
                body: Localized::new(
                    "Proyecto orientado a fundamentos: implementar estructuras y operaciones desde cero para modelar cursos, estudiantes y notas en una aplicación de consola.",
                    "Fundamentals-focused project: implement data structures and operations from scratch to model courses, students, and grades in a CLI app.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Architecture,
                title: Localized::new("Estructura de datos", "Data structure"),
                body: Localized::new(
                    "Un árbol AVL organiza entidades principales y, en cada nodo, multilistas permiten relacionar materias/estudiantes/notas de forma eficiente.",
                    "An AVL tree organizes core entities and, per node, multilists connect subjects/students/grades efficiently.",
                ),
                bullets: None,
            },
            ProjectSection {
                id: SectionId::Challenges,
                title: Localized::new("Retos", "Challenges"),
                body: Localized::new(
                    "Mantener consistencia y rendimiento sin STL moderna: punteros, balanceo AVL, inserciones/borrados y recorridos para reportes.",
                    "Keeping consistency and performance without modern STL: pointers, AVL balancing, insert/delete operations, and traversals for reporting.",
                ),
                bullets: None,
            },
        ],
        ..Project::BLANK
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::media::{resolve_playback_url, Playback};

    #[test]
    fn test_ids_are_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_find_project() {
        let p = find_project("diagseg").expect("diagseg should exist");
        assert_eq!(p.href(), "/projects/diagseg");
        assert!(find_project("nope").is_none());
    }

    #[test]
    fn test_featured_limit() {
        let featured = featured_projects();
        assert!(featured.len() <= 2);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_listing_filters_and_sorts() {
        let all = listed_projects(Filter::All);
        assert!(all.iter().all(|p| !p.featured));
        let years = all.iter().map(|p| p.year.unwrap_or("")).collect::<Vec<_>>();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);

        let backend = listed_projects(Filter::Only(Category::Backend));
        assert_eq!(
            backend.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec!["academic-cli"]
        );
        let fullstack = listed_projects(Filter::Only(Category::Fullstack));
        assert_eq!(fullstack.len() + backend.len(), all.len());
    }

    #[test]
    fn test_equal_years_keep_declaration_order() {
        let ids = listed_projects(Filter::All)
            .iter()
            .filter(|p| p.year == Some("2024"))
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["ecommerce-artesanias", "restaurant-app"]);
    }

    #[test]
    fn test_coming_soon_is_not_browsable() {
        let p = find_project("access-platform").expect("should exist");
        assert!(!p.is_browsable());
        assert!(find_project("diagseg").is_some_and(|p| p.is_browsable()));
    }

    #[test]
    fn test_section_ids_follow_declaration() {
        let p = find_project("cinema-management-system").expect("should exist");
        assert_eq!(
            p.section_ids(),
            vec!["overview", "problem", "solution", "architecture", "results", "next"]
        );
        assert_eq!(
            p.section("problem").map(|s| s.title.en),
            Some("Problem")
        );
        assert!(p.section("missing").is_none());
    }

    #[test]
    fn test_stack_chips() {
        let p = find_project("access-platform").expect("should exist");
        let (shown, extra) = p.stack_chips(6);
        assert_eq!(shown.len(), 6);
        assert_eq!(extra, 4);
        let p = find_project("restaurant-app").expect("should exist");
        assert_eq!(p.stack_chips(6), (p.stack, 0));
    }

    #[test]
    fn test_all_videos_resolve() {
        for p in PROJECTS {
            for v in p.media.videos {
                assert!(
                    matches!(resolve_playback_url(&v.source), Some(Playback::Native(_) | Playback::Embed(_))),
                    "{} has an unresolvable video",
                    p.id
                );
            }
        }
    }
}
