//! Hierarchy tiers and per-department sub-divisions.
//!
//! Both are computed independently of the stage that produced the
//! decision: the tier from the title alone, the sub-division from the title
//! and the decided department.

use crate::record::{Department, HierarchyLevel};

/// Patterns that put a title in the C-Suite tier.
pub const C_SUITE_TIER: &[&str] = &[
    r"\bchief\b",
    r"\b(ceo|cfo|cto|cio|coo|cmo|cco|cso|cao|cdo|chro|ciso|cpo|cro|clo|cqa|cqo|ctto)\b",
    r"\b(co-?)?founder\b|\bcofounder\b|\b(co-?)?fundador(a)?\b",
    r"\bowners?\b|\bpropietari(o|a)\b|\bduen(o|a)\b",
    r"\bpartner\b|\bsoci(o|a)\b",
    r"\bpresident(e|a)?\b",
    r"\bgeneral manager\b|\bgerente general\b|\bdirector(a)? general\b|\bdireccion general\b",
    r"\bmanaging director\b|\bdirector(a)? gerente\b|\bcountry manager\b",
    r"\bconsejer(o|a) delegad(o|a)\b",
];

/// Terms that disqualify the C-Suite tier even if a pattern above matched.
pub const C_SUITE_TIER_UNLESS: &[&str] = &[
    r"\bvice\b|\bvice-?president|\bvicepresident|\bvp\b|\bsvp\b|\bevp\b",
    r"\b(product|process|project|business|data) owners?\b",
    r"\bbusiness partner\b|\bhrbp\b",
];

/// Remaining tiers, checked in order after the C-Suite tier.
pub const TIERS: &[(HierarchyLevel, &[&str])] = &[
    (
        HierarchyLevel::VpDirector,
        &[
            r"\bvp\b|\bsvp\b|\bevp\b|\bvice ?-?president(e|a)?\b|\bvicepresident(e|a)?\b",
            r"\bdirect(or|ora)\b|\bsubdirector(a)?\b|\bdireccion\b",
            r"\bhead\b",
        ],
    ),
    (
        HierarchyLevel::Manager,
        &[
            r"\bmanager\b|\bgerente\b",
            r"\bjef(e|a)\b|\bresponsable\b|\bencargad(o|a)\b",
            r"\bcontroller\b|\bkam\b|\bgestor(a)?\b",
        ],
    ),
    (
        HierarchyLevel::Lead,
        &[
            r"\blead\b|\bleader\b|\blider\b",
            r"\bcoordinador(a)?\b|\bcoordinator\b",
            r"\bsupervisor(a)?\b",
        ],
    ),
];

pub const DEFAULT_SUBDIVISION: &str = "General";

/// Sub-division tables keyed by department. Departments without an entry
/// always get [`DEFAULT_SUBDIVISION`].
pub const SUBDIVISIONS: &[(Department, &[(&str, &str)])] = &[
    (
        Department::Technology,
        &[
            ("Data", r"\bdata\b|\bdatos\b|\bbusiness intelligence\b|\bbi\b|\bcdo\b"),
            ("Engineering", r"\bengineering\b|\bingenieria\b|\bengineer\b|\bsoftware\b|\bdevelopment\b|\bdesarrollo\b"),
            ("Technical", r"\btechnical\b|\btecnic(o|a)\b|\bcto\b"),
            ("Product", r"\bproducts?\b|\bproductos?\b"),
            ("Infrastructure", r"\binfraestructura\b|\binfrastructure\b|\bcloud\b|\bdevops\b|\bsistemas\b|\bsystems?\b|\bredes\b|\bnetworks?\b"),
        ],
    ),
    (
        Department::Marketing,
        &[
            ("Product Marketing", r"\bproduct marketing\b"),
            ("Digital", r"\bdigital\b|\bonline\b|\bseo\b|\bsem\b|\binbound\b|\bemail\b|\bgrowth\b|\bsocial media\b"),
            ("Brand", r"\bbrand(ing)?\b|\bmarca\b"),
            ("Communications", r"\bcomunicacion(es)?\b|\bcommunications?\b|\brelaciones publicas\b|\bpublic relations\b|\bprensa\b"),
            ("Content", r"\bcontent\b|\bcontenidos?\b"),
        ],
    ),
    (
        Department::Sales,
        &[
            ("Business Development", r"\bbusiness development\b|\bdesarrollo de negocios?\b|\bbizdev\b"),
            ("Key Accounts", r"\bkey accounts?\b|\bkam\b|\bcuentas clave\b"),
            ("Channel & Partners", r"\bchannel\b|\bcanal\b|\bpartnerships?\b|\balianzas\b"),
            ("International", r"\bexport(ation)?\b|\bexportacion\b|\binternational\b|\binternacional\b"),
            ("Presales", r"\bpre-?sales\b|\bpreventa\b"),
        ],
    ),
    (
        Department::Finance,
        &[
            ("Accounting", r"\bcontabilidad\b|\baccounting\b|\bcontable\b|\baccountant\b"),
            ("Controlling", r"\bcontroll(er|ing)\b|\bcontrol de gestion\b|\bfp&a\b"),
            ("Treasury", r"\btesoreria\b|\btreasury\b|\btreasurer\b|\btesorer(o|a)\b"),
            ("Tax", r"\bfiscal\b|\btax\b|\bimpuestos\b"),
            ("Audit", r"\baudit(ing|oria)?\b|\bauditor(a)?\b"),
        ],
    ),
    (
        Department::HumanResources,
        &[
            ("Talent Acquisition", r"\bseleccion\b|\brecruit(ing|ment|er)?\b|\btalent acquisition\b|\badquisicion de talento\b"),
            ("Learning & Development", r"\bformacion\b|\bformador(a)?\b|\btraining\b|\blearning\b|\bl&d\b"),
            ("Compensation & Benefits", r"\bcompensa(tion|cion)\b|\bbenefits\b|\bbeneficios\b|\bnominas?\b|\bpayroll\b"),
            ("Business Partner", r"\bhrbp\b|\bbusiness partner\b"),
        ],
    ),
    (
        Department::Legal,
        &[
            ("Compliance", r"\bcompliance\b|\bcumplimiento\b|\bregulatory\b|\bregulatorio\b"),
            ("Privacy", r"\bprivacy\b|\bprivacidad\b|\bproteccion de datos\b|\bdpo\b"),
            ("Corporate", r"\bcorporate\b|\bcorporativ(o|a)\b|\bmercantil\b|\bsocietario\b"),
        ],
    ),
    (
        Department::Operations,
        &[
            ("Supply Chain", r"\bsupply chain\b|\bcadena de suministro\b|\blogistics?\b|\blogistica\b|\bwarehouse\b|\balmacen\b"),
            ("Production", r"\bproduction\b|\bproduccion\b|\bmanufacturing\b|\bfabricacion\b|\bplanta?\b"),
            ("Quality", r"\bquality\b|\bcalidad\b|\bcqa\b|\bcqo\b"),
            ("Procurement", r"\bprocurement\b|\bpurchasing\b|\bcompras\b|\bbuyer\b"),
            ("Maintenance", r"\bmaintenance\b|\bmantenimiento\b"),
        ],
    ),
    (Department::Projects, &[("PMO", r"\bpmo\b")]),
];
