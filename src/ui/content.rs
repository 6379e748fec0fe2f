//! Static copy for every section, as published on the foundation's site.

pub const BRAND: &str = "Fundación Luz de Vida";
pub const BRAND_SHORT: &str = "Luz de Vida";

// --- Inicio ---

pub const HERO_NIT: &str = "NIT: 9003299113";
pub const HERO_REGISTRY: &str = "Inscripción N° S0036006";
pub const HERO_DATE: &str = "21 de Diciembre de 2009";
pub const HERO_TAGLINE: &str = "Educando las nuevas generaciones para construir un mejor país";
pub const HERO_MISSION: &str = "Facilitamos el acceso a oportunidades educativas y acompañamos a \
    niños y jóvenes en su desarrollo formativo en Soacha, Cundinamarca.";
pub const CTA_REQUEST_INFO: &str = "Solicitar información";
pub const CTA_PARTICIPATE: &str = "Cómo participar";

// --- Quiénes Somos ---

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Fundación Luz de Vida es una organización educativa y social con enfoque comunitario, \
     establecida en Soacha, Cundinamarca. Nuestro propósito es incentivar el estudio y facilitar \
     el acceso a beneficios educativos para niños y jóvenes de nuestra región.",
    "Trabajamos directamente con las comunidades locales, creando puentes entre las familias y \
     oportunidades formativas que fortalezcan el desarrollo académico y personal de los \
     estudiantes. A través de actividades comunitarias, sociales y pedagógicas, nos acercamos a \
     quienes más lo necesitan.",
    "Contamos con alianzas estratégicas con instituciones educativas de trayectoria reconocida, \
     permitiéndonos ofrecer programas de formación en áreas académicas y tecnológicas que \
     preparan a las nuevas generaciones para un futuro prometedor.",
];

// --- Qué Hacemos ---

pub const PROGRAMS_INTRO: &str = "Desarrollamos actividades integrales orientadas a facilitar el \
    acceso educativo y fortalecer el aprendizaje de niños y jóvenes en Soacha y zonas cercanas.";

pub const PROGRAM_CARDS: [(&str, &str, &str); 4] = [
    (
        "📚",
        "Acceso Educativo",
        "Facilitamos el acceso a beneficios y programas educativos que fortalecen la formación \
         académica y tecnológica.",
    ),
    (
        "👥",
        "Actividades Comunitarias",
        "Organizamos eventos sociales, recreativos y pedagógicos para acercarnos a las \
         comunidades y motivar el aprendizaje.",
    ),
    (
        "❤",
        "Acompañamiento",
        "Brindamos orientación y apoyo continuo a estudiantes y familias durante su proceso \
         formativo.",
    ),
    (
        "🎯",
        "Alianzas Educativas",
        "Mantenemos convenios con instituciones de trayectoria para ofrecer formación de calidad \
         en diversas áreas.",
    ),
];

// --- A Quién Apoyamos ---

pub const SUPPORT_STATS: [(&str, &str, &str); 3] = [
    ("6 - 20 años", "Rango de Edad", "Niños y jóvenes en edad escolar y bachilleres"),
    ("Soacha", "Área de Cobertura", "Cundinamarca y zonas cercanas"),
    ("+", "Comunidad", "Familias comprometidas con la educación"),
];

pub const SUPPORT_PARAGRAPHS: [&str; 2] = [
    "Nuestro enfoque está dirigido a estudiantes de colegios y bachilleres entre 6 y 20 años \
     que buscan fortalecer su formación académica y acceder a oportunidades educativas de \
     calidad.",
    "Trabajamos especialmente con comunidades y familias en Soacha que desean invertir en el \
     futuro de sus hijos a través de la educación, brindándoles el acompañamiento y las \
     herramientas necesarias para alcanzar sus metas.",
];

// --- Nuestros Valores (page section without a nav entry) ---

pub const VALUES: [(&str, &str); 6] = [
    ("Compromiso Educativo", "Dedicados al desarrollo integral de cada estudiante"),
    ("Transparencia", "Gestión clara y responsable de todos nuestros procesos"),
    ("Inclusión", "Acceso equitativo a oportunidades para todas las familias"),
    ("Excelencia", "Búsqueda constante de la calidad en nuestros programas"),
    ("Respeto", "Valoración de la dignidad y derechos de cada persona"),
    ("Responsabilidad Social", "Contribución activa al desarrollo de nuestra comunidad"),
];

// --- Transparencia ---

pub const PRIVACY_HEADING: &str = "Compromiso con la Privacidad";

pub const PRIVACY_INTRO: &str = "En Fundación Luz de Vida manejamos la información con el máximo \
    respeto y responsabilidad. Los datos recopilados durante nuestras actividades se utilizan \
    exclusivamente con fines educativos e informativos.";

pub const PRIVACY_COLLECTED_HEADING: &str = "Información que recopilamos:";

pub const PRIVACY_COLLECTED: [&str; 3] = [
    "• Nombre del estudiante",
    "• Teléfono del acudiente o responsable",
    "• Información básica necesaria para actividades comunitarias, sociales y recreativas",
];

pub const PRIVACY_USE: &str = "Uso de la información: los datos recopilados se utilizan \
    únicamente para mantener contacto informativo, coordinar actividades educativas y brindar \
    acompañamiento en el proceso formativo. No compartimos información personal con terceros \
    sin consentimiento previo.";

pub const PRIVACY_CONFIDENTIALITY: &str = "Confidencialidad: implementamos medidas de seguridad \
    para proteger la información y garantizar su manejo confidencial conforme a las normativas \
    colombianas de protección de datos personales.";

pub const PRIVACY_RIGHTS: &str = "Para consultas sobre el tratamiento de datos o ejercer sus \
    derechos de acceso, rectificación o supresión, puede contactarnos a través de nuestros \
    canales oficiales.";

// --- Contacto ---

pub const CONTACT_WHATSAPP_HEADING: &str = "WhatsApp";
pub const CONTACT_PHONE_PRIMARY: &str = "+57 310 336 7911";
pub const CONTACT_PHONE_SECONDARY: &str = "+57 310 335 0100";
pub const CONTACT_WHATSAPP_BLURB: &str = "Contáctanos por WhatsApp para solicitar información \
    sobre nuestros programas y beneficios educativos.";

pub const CONTACT_LOCATION_HEADING: &str = "Ubicación";
pub const CONTACT_ADDRESS: &str = "Calle 19 # 7-14 Piso 1\nSoacha, Cundinamarca\nColombia";
pub const CONTACT_LOCATION_BLURB: &str = "Visítanos en nuestra sede en Soacha para conocer más \
    sobre la fundación y nuestras actividades.";
pub const CTA_DIRECTIONS: &str = "Cómo llegar";
pub const CTA_OPEN_MAPS: &str = "Abrir en Google Maps";

pub const CONTACT_CLOSING_HEADING: &str = "¿Listo para comenzar?";
pub const CONTACT_CLOSING: &str = "Si deseas conocer más sobre nuestros programas educativos y \
    cómo tu familia puede beneficiarse, escríbenos por WhatsApp. Estamos aquí para acompañarte \
    en este importante proceso.";
pub const CTA_SEND_WHATSAPP: &str = "Enviar mensaje por WhatsApp";

// --- Footer ---

pub const FOOTER_BLURB: &str = "Fundación educativa y social comprometida con el desarrollo \
    integral de niños y jóvenes en Soacha, Cundinamarca.";
pub const FOOTER_LINKS_HEADING: &str = "Enlaces Rápidos";
pub const FOOTER_CONTACT_HEADING: &str = "Contacto";
pub const FOOTER_LEGAL: &str = "© 2009 - 2026 Fundación Luz de Vida. Todos los derechos \
    reservados.";
