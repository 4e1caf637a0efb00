//! Stage tables for the ordered pipeline: ownership, general management,
//! C-level acronyms, generic overrides, solo titles, standalone department
//! names, the project-manager router and the seniority vocabulary.
//!
//! Patterns are written against normalised text (lower-case ASCII, single
//! spaces). Within each table, declaration order is the tie-break.

use super::RuleSpec;
use crate::record::Department;

// ── Stage 3: owners ─────────────────────────────────────────────────────────

pub const OWNERS: &[&str] = &[
    r"\bowners?\b|\bco-?owner\b",
    r"\bfounder\b|\bco-?founder\b|\bcofounder\b",
    r"\b(co-?)?fundador(a)?\b|\bcofundador(a)?\b",
    r"\bpropietari(o|a)\b|\bduen(o|a)\b",
    r"\bpartner\b|\bsoci(o|a)\b",
    r"\bpresident(e|a)?\b",
];

/// Terms that look like ownership but are not.
pub const OWNERS_UNLESS: &[&str] = &[
    r"\bvice\b|\bvice-?president|\bvicepresident|\bvp\b|\bsvp\b|\bevp\b",
    r"\b(product|process|project|business|data) owners?\b",
    r"\bbusiness partner\b|\bhrbp\b|\bpartner manager\b",
];

pub const OWNERS_LABEL: &str = "owners";

// ── Stage 4: general management ─────────────────────────────────────────────

pub const GENERAL_MANAGEMENT: RuleSpec = RuleSpec {
    patterns: &[
        r"\bgeneral manager\b|\bgerente general\b",
        r"\bdirector(a)? general\b|\bdireccion general\b",
        r"\bmanaging director\b|\bdirector(a)? gerente\b",
        r"\bcountry manager\b",
    ],
    label: "directores generales",
    department: Department::Executive,
};

// ── Stage 5: C-suite ────────────────────────────────────────────────────────

/// C-level roles route to the department they lead.
pub const C_SUITE: &[RuleSpec] = &[
    RuleSpec {
        patterns: &[r"\bciso\b", r"chief information security officer"],
        label: "CISOs",
        department: Department::Technology,
    },
    RuleSpec {
        patterns: &[r"\bcio\b", r"chief information( technology)? officer"],
        label: "CIOs",
        department: Department::Technology,
    },
    RuleSpec {
        patterns: &[
            r"\bcto\b|\bctto\b",
            r"chief technical",
            r"chief technology( officer)?",
            r"chief (of )?technology",
            r"chief \w+ (and|&|y) technology",
        ],
        label: "CTOs",
        department: Department::Technology,
    },
    RuleSpec {
        patterns: &[r"\bcdo\b", r"chief (data|digital)( and analytics)? officer"],
        label: "CDOs",
        department: Department::Technology,
    },
    RuleSpec {
        patterns: &[r"\bcoo\b", r"chief (of )?operati(ons|ng)( officer)?", r"\boperations officer\b"],
        label: "COOs",
        department: Department::Operations,
    },
    RuleSpec {
        patterns: &[r"\bcco\b", r"chief commercial officer"],
        label: "CCOs",
        department: Department::Sales,
    },
    RuleSpec {
        patterns: &[r"\bcro\b", r"chief revenue officer"],
        label: "CROs",
        department: Department::Sales,
    },
    RuleSpec {
        patterns: &[r"\bcmo\b", r"chief marketing( officer)?"],
        label: "CMOs",
        department: Department::Marketing,
    },
    RuleSpec {
        patterns: &[r"\bceo\b", r"chief executive( officer)?", r"\bconsejer(o|a) delegad(o|a)\b"],
        label: "CEOs",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"\bcfo\b", r"chief financ(e|ial)( officer)?"],
        label: "CFOs",
        department: Department::Finance,
    },
    RuleSpec {
        patterns: &[r"chief product officer"],
        label: "CPOs",
        department: Department::Product,
    },
    RuleSpec {
        patterns: &[
            r"\bchro\b|\bcpo\b",
            r"chief (human resources|people|hr|talent)\b",
        ],
        label: "CHROs",
        department: Department::HumanResources,
    },
    RuleSpec {
        patterns: &[r"\bcso\b", r"chief (system|systems|security|strategy) officer"],
        label: "CSOs",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"\bcao\b", r"chief administrat(ive|ion) officer"],
        label: "CAOs",
        department: Department::Operations,
    },
    RuleSpec {
        patterns: &[r"\bclo\b", r"chief legal officer"],
        label: "CLOs",
        department: Department::Legal,
    },
    RuleSpec {
        patterns: &[r"\bcqa\b|\bcqo\b", r"chief quality( assurance)?( officer)?"],
        label: "CQAs",
        department: Department::Operations,
    },
];

// ── Stage 6: generic area/role overrides ────────────────────────────────────

pub const GENERIC_OVERRIDES: &[RuleSpec] = &[
    RuleSpec {
        patterns: &[r"\barea director\b", r"\bdirector(a)? de area$", r"^director(a)? del area$"],
        label: "directores de área",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"\bassociate director\b", r"\bdirector(a)? asociad(o|a)\b"],
        label: "directores asociados",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"\bregional director\b", r"\bdirector(a)? regional\b"],
        label: "directores regionales",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"\bexecutive director\b", r"\bdirector(a)? ejecutiv(o|a)\b"],
        label: "directores ejecutivos",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"\bdeputy director\b", r"\bdirector(a)? adjunt(o|a)\b", r"^subdirector(a)?$"],
        label: "subdirectores",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^area manager$", r"^(gerente|jef(e|a)) de area$"],
        label: "gerentes de área",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"\bregional manager\b", r"\bgerente regional\b"],
        label: "gerentes regionales",
        department: Department::Executive,
    },
];

// ── Stage 7: solo titles (whole-string) ─────────────────────────────────────

pub const SOLO_TITLES: &[RuleSpec] = &[
    RuleSpec {
        patterns: &[r"^(senior |sr\.? )?(vp|svp|evp|vice ?-?president(e|a)?|vicepresident(e|a)?)$"],
        label: "vicepresidentes",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^(senior |sr\.? )?(director|directora|head)$"],
        label: "directores",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^(senior |sr\.? )?(manager|gerente)$"],
        label: "gerentes",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^(jefe|jefa)$"],
        label: "jefes",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^responsable$"],
        label: "responsables",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^(team )?(lead|leader|lider)$"],
        label: "líderes",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^(coordinador|coordinadora|coordinator)$"],
        label: "coordinadores",
        department: Department::Executive,
    },
    RuleSpec {
        patterns: &[r"^(supervisor|supervisora)$"],
        label: "supervisores",
        department: Department::Executive,
    },
];

// ── Stage 8: standalone department names (whole-string) ─────────────────────

pub const STANDALONE_DEPARTMENTS: &[(&str, Department)] = &[
    (r"^(marketing|mkt|marketing digital|comunicacion|comunicaciones)$", Department::Marketing),
    (r"^(sales|ventas|comercial|commercial|business development|desarrollo de negocio)$", Department::Sales),
    (r"^(it|ti|tecnologia|technology|tech|sistemas|informatica|engineering|ingenieria|i\+d|r&d)$", Department::Technology),
    (r"^(finance|finanzas|accounting|contabilidad|administracion y finanzas|tesoreria)$", Department::Finance),
    (r"^(hr|rrhh|rr\.? ?hh\.?|recursos humanos|human resources|people|talent|talento)$", Department::HumanResources),
    (r"^(legal|juridico|asesoria juridica|compliance)$", Department::Legal),
    (r"^(operations|operaciones|ops|logistica|logistics|supply chain|produccion|calidad)$", Department::Operations),
    (r"^(product|producto|product management)$", Department::Product),
    (r"^(projects|proyectos|pmo)$", Department::Projects),
    (r"^(management|direccion|gerencia|board|consejo de administracion)$", Department::Executive),
];

// ── Stage 9: project-manager router ─────────────────────────────────────────

pub const PROJECT_MANAGER: &[&str] = &[
    r"\bproject (manager|director|lead|leader|head)\b",
    r"\bhead of projects?\b",
    r"\b(gerente|jef(e|a)|director(a)?|responsable|coordinador(a)?|lider|gestor(a)?) (del area )?de proyectos?\b",
    r"\bpmo (manager|director|lead|head)\b",
];

/// Context hints used to pick the department that owns a project role,
/// in priority order. No hint means Technology.
pub const PROJECT_HINTS: &[(&str, Department, &[&str])] = &[
    (
        "technology",
        Department::Technology,
        &[
            r"\b(it|ti)\b",
            r"\bsoftware\b",
            r"\btech(nical|nology)?\b|\btecnologia\b|\btecnic(o|a)\b",
            r"\bsistemas\b|\bsystems?\b",
            r"\bdigital\b",
            r"\bdata\b|\bdatos\b",
            r"\bengineering\b|\bingenieria\b",
            r"\bcloud\b|\bdevops\b",
            r"\berp\b|\bsap\b|\bcrm\b",
        ],
    ),
    (
        "marketing",
        Department::Marketing,
        &[
            r"\bmarketing\b",
            r"\bcampaigns?\b|\bcampanas?\b",
            r"\bbrand\b|\bmarca\b",
            r"\bcomunicacion(es)?\b|\bcommunications?\b",
            r"\bevents?\b|\beventos?\b",
        ],
    ),
    (
        "operations",
        Department::Operations,
        &[
            r"\boperations\b|\boperaciones\b",
            r"\bconstruc(tion|cion)\b|\bobras?\b",
            r"\bindustrial\b",
            r"\bproduc(tion|cion)\b",
            r"\blogistics?\b|\blogistica\b|\bsupply chain\b",
            r"\bplanta?\b",
            r"\bmaintenance\b|\bmantenimiento\b",
            r"\bfacilities\b|\binstalaciones\b",
        ],
    ),
];

pub const PROJECT_DEFAULT_HINT: &str = "default";

// ── Seniority vocabulary ────────────────────────────────────────────────────

/// Seniority terms in priority order, each with the plural word used when
/// building "{word} de {area}" labels.
pub const SENIORITY_WORDS: &[(&str, &str)] = &[
    (r"\bchief\b|\bdirect(or|ora|ores|oras)\b|\bhead\b|\bdireccion\b|\bsubdirector(a)?\b", "directores"),
    (r"\bvp\b|\bsvp\b|\bevp\b|\bvice ?-?president(e|a)?\b|\bvicepresident(e|a)?\b", "vicepresidentes"),
    (r"\bmanager\b|\bgerente\b", "gerentes"),
    (r"\bjef(e|a)\b", "jefes"),
    (r"\blead\b|\bleader\b|\blider\b", "líderes"),
    (r"\bcoordinador(a)?\b|\bcoordinator\b", "coordinadores"),
    (r"\bsupervisor(a)?\b", "supervisores"),
    (r"\bresponsable\b", "responsables"),
    (r"\bcontroller\b", "controllers"),
    (r"\baccountant\b|\bcontable\b", "contables"),
    (r"\bstrategist\b|\bestratega\b", "estrategas"),
    (r"\bexecutive\b|\bejecutiv(o|a)\b", "ejecutivos"),
    (r"\bgestor(a)?\b", "gestores"),
];

// ── Fast path ───────────────────────────────────────────────────────────────

/// Common normalised titles whose decisions are computed once at startup.
pub const FAST_PATH_TITLES: &[&str] = &[
    "ceo",
    "cto",
    "cfo",
    "coo",
    "cio",
    "cmo",
    "founder",
    "co-founder",
    "owner",
    "founder & ceo",
    "general manager",
    "director general",
    "marketing manager",
    "head of marketing",
    "marketing director",
    "director de marketing",
    "sales manager",
    "sales director",
    "director comercial",
    "it manager",
    "head of engineering",
    "engineering manager",
    "hr manager",
    "director de recursos humanos",
    "project manager",
    "product manager",
    "product owner",
    "director",
    "manager",
    "vp",
    "marketing",
    "it",
];
