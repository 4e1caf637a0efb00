//! Department profiles, in evaluation order.
//!
//! A department qualifies when a `must` pattern and a `seniority` pattern
//! match and no `exclude` pattern does. `specials` are fixed labels checked
//! before the generic "{seniority} de {area}" template; `areas` are checked
//! in order and fall back to the department's own name.

use super::DepartmentSpec;
use crate::record::Department;

const JUNIOR: &str = r"\bjunior\b|\bjr\b";
const TRAINEE: &str = r"\btrainee\b|\bbecari(o|a)\b|\bintern\b|\binternship\b|\bpracticas\b";
const ASSISTANT: &str = r"\bassistant\b|\basistente\b|\bauxiliar\b";

const SENIOR: &str = r"\bchief\b|\bhead\b|\bdirect(or|ora)\b|\bdireccion\b|\bvp\b|\bvice ?-?president(e|a)?\b|\bvicepresident(e|a)?\b";
const MANAGER: &str = r"\bmanager\b|\bgerente\b|\bjef(e|a)\b|\bresponsable\b";
const LEAD: &str = r"\blead\b|\bleader\b|\blider\b";

pub const DEPARTMENTS: &[DepartmentSpec] = &[
    DepartmentSpec {
        department: Department::Marketing,
        must: &[
            r"\bmarketing\b|\bmkt\b",
            r"\bdigital\b",
            r"\bcomunicacion(es)?\b|\bcommunications?\b",
            r"\binbound\b|\bemail\b|\bmarketing automation\b",
            r"\bbrand(ing)?\b|\bmarca\b",
            r"\bgrowth\b|\bseo\b|\bsem\b",
            r"\bpublicidad\b|\badvertising\b",
            r"\bcontent\b|\bcontenidos?\b",
            r"\brelaciones publicas\b|\bpublic relations\b|\bsocial media\b",
        ],
        seniority: &[SENIOR, MANAGER, LEAD, r"\bcmo\b", r"\bstrategist\b|\bestratega\b"],
        exclude: &[
            JUNIOR,
            TRAINEE,
            r"\bassistant\b|\basistente\b|\bauxiliar\b|\bcoordinador(a)?\b",
            r"\bspecialist\b|\bespecialista\b|\bconsultant\b",
            r"\bcommunity\b|\bartist\b|\bart\b",
            r"\bdesign(er)?\b|\bdiseno\b|\bdisenador(a)?\b|\badvisor\b",
            r"\banalytics?\b|\bdata\b|\banalista\b",
            r"\bcustomer\b|\baccount\b",
        ],
        areas: &[
            ("marketing digital", r"\bdigital\b|\bonline\b|\bseo\b|\bsem\b|\binbound\b|\bemail\b|\bmarketing automation\b|\be-?commerce\b|\bsocial media\b"),
            ("comunicación", r"\bcomunicacion(es)?\b|\bcommunications?\b|\brelaciones publicas\b|\bpublic relations\b|\bprensa\b|\bpress\b"),
            ("marca", r"\bbrand(ing)?\b|\bmarca\b"),
            ("contenidos", r"\bcontent\b|\bcontenidos?\b"),
            ("publicidad", r"\bpublicidad\b|\badvertising\b"),
            ("growth", r"\bgrowth\b"),
        ],
        specials: &[
            (r"\bbrand manager\b|\bgerente de marca\b", "brand managers"),
            (r"\bproduct marketing manager\b", "product marketing managers"),
            (r"\bgrowth (lead|manager|head)\b|\bhead of growth\b", "responsables de growth"),
        ],
    },
    DepartmentSpec {
        department: Department::Sales,
        must: &[
            r"\bsales\b|\bventas?\b",
            r"\bcomercial(es)?\b|\bcommercial\b",
            r"\bbusiness development\b|\bdesarrollo de negocios?\b|\bbizdev\b",
            r"\bkey accounts?\b|\bkam\b|\bcuentas clave\b",
            r"\baccount (manager|executive|director)\b",
            r"\brevenue\b",
            r"\bpre-?sales\b|\bpreventa\b",
            r"\bchannel\b|\bcanal\b|\bpartnerships?\b|\balianzas\b",
            r"\bexport(ation)?\b|\bexportacion\b",
            r"\bretail\b",
        ],
        seniority: &[
            SENIOR,
            MANAGER,
            LEAD,
            r"\bkam\b",
            r"\bsupervisor(a)?\b",
            r"\bexecutive\b|\bejecutiv(o|a)\b",
            r"\bgestor(a)?\b",
        ],
        exclude: &[
            JUNIOR,
            TRAINEE,
            ASSISTANT,
            r"\bteleoperador(a)?\b|\bcall center\b|\btelemarketing\b",
            r"\bdependient(e|a)\b|\bcajer(o|a)\b|\bshop assistant\b",
        ],
        areas: &[
            ("desarrollo de negocio", r"\bbusiness development\b|\bdesarrollo de negocios?\b|\bbizdev\b"),
            ("cuentas clave", r"\bkey accounts?\b|\bkam\b|\bcuentas clave\b"),
            ("exportación", r"\bexport(ation)?\b|\bexportacion\b|\binternational\b|\binternacional\b"),
            ("canal", r"\bchannel\b|\bcanal\b|\bpartnerships?\b|\balianzas\b"),
            ("preventa", r"\bpre-?sales\b|\bpreventa\b"),
        ],
        specials: &[
            (r"\bkey account manager\b|\bkam\b", "key account managers"),
            (r"\bdirector(a)? comercial\b|\bcommercial director\b", "directores comerciales"),
        ],
    },
    DepartmentSpec {
        department: Department::Technology,
        must: &[
            r"\b(it|ti)\b",
            r"\bsistemas\b|\bsystems?\b",
            r"\btech\b|\btechnology\b|\btecnologia\b",
            r"\binformatic(a|o)\b|\binformation\b",
            r"\btechnical\b|\btecnic(o|a)\b",
            r"\bengineering\b|\bingenieria\b|\bengineer\b|\bingenier(o|a)\b",
            r"\bsoftware\b|\bdevelopment\b|\bdevelopers?\b|\bdesarrollo\b",
            r"\bdevops\b|\bcloud\b|\binfraestructura\b|\binfrastructure\b",
            r"\bdata\b|\bdatos\b",
            r"\bciberseguridad\b|\bcybersecurity\b|\bsecurity\b",
            r"\bandroid\b|\bios\b|\bfull-?stack\b|\bfrontend\b|\bbackend\b|\bmobile\b",
            r"\br&d\b|\bi\+d\b",
            r"\bqa\b|\bquality assurance\b",
        ],
        seniority: &[SENIOR, MANAGER, LEAD, r"\bcio\b|\bcto\b|\bciso\b", r"\badministrador(a)?\b"],
        exclude: &[
            JUNIOR,
            TRAINEE,
            r"\bassistant\b|\basistente\b",
            r"\bspecialist\b|\bespecialista\b|\bconsultant\b",
            r"\bcommunity\b|\bartist\b|\bdesign\b|\badvisor\b",
            r"\banalytics?\b|\banalista\b",
            r"\bdesarrollo de negocios?\b|\bbusiness development\b",
        ],
        areas: &[
            ("ingeniería", r"\bengineering\b|\bingenieria\b|\bengineer\b|\bingenier(o|a)\b"),
            ("datos", r"\bdata\b|\bdatos\b|\bbusiness intelligence\b|\bbi\b"),
            ("sistemas", r"\bsistemas\b|\bsystems?\b|\binformatic(a|o)\b"),
            ("infraestructura", r"\binfraestructura\b|\binfrastructure\b|\bcloud\b|\bdevops\b|\bredes\b|\bnetworks?\b"),
            ("ciberseguridad", r"\bciberseguridad\b|\bcybersecurity\b|\bsecurity\b|\bseguridad\b"),
            ("desarrollo", r"\bsoftware\b|\bdevelopment\b|\bdevelopers?\b|\bdesarrollo\b|\bfull-?stack\b|\bfrontend\b|\bbackend\b|\bandroid\b|\bios\b|\bmobile\b"),
            ("calidad", r"\bqa\b|\bquality assurance\b"),
            ("I+D", r"\br&d\b|\bi\+d\b"),
        ],
        specials: &[
            (
                r"\btech(nical)? lead(er)?\b|\blider tecnico\b|\blead (software |android |ios |backend |frontend |full-?stack )?(engineer|developer)\b",
                "líderes técnicos",
            ),
            (r"\btechnical (director|chief)\b|\bdirector(a)? tecnic(o|a)\b", "directores técnicos"),
            (
                r"\btechnical manager\b|\bmanager technical\b|\bgerente tecnic(o|a)\b|\bjef(e|a) tecnic(o|a)\b|\bresponsable tecnic(o|a)\b",
                "responsables técnicos",
            ),
            (r"\bengineering manager\b", "engineering managers"),
        ],
    },
    DepartmentSpec {
        department: Department::Finance,
        must: &[
            r"\bfinan(ce|cial|ciero|ciera|zas)\b",
            r"\bcontabilidad\b|\baccounting\b|\bcontable\b|\baccountant\b",
            r"\bcontroll(er|ing)\b|\bcontrol de gestion\b|\bfp&a\b",
            r"\btesoreria\b|\btreasury\b|\btreasurer\b|\btesorer(o|a)\b",
            r"\bfiscal\b|\btax\b|\bimpuestos\b",
            r"\baudit(ing|oria)?\b|\bauditor(a)?\b",
            r"\bcredit(o)?\b|\bcobros\b",
        ],
        seniority: &[
            SENIOR,
            MANAGER,
            LEAD,
            r"\bcontroller\b",
            r"\baccountant\b|\bcontable\b",
            r"\btreasurer\b|\btesorer(o|a)\b",
        ],
        exclude: &[
            JUNIOR,
            TRAINEE,
            ASSISTANT,
            r"\banalista\b|\banalyst\b",
            r"\badministrativ(o|a)\b|\bclerk\b",
        ],
        areas: &[
            ("contabilidad", r"\bcontabilidad\b|\baccounting\b"),
            ("control de gestión", r"\bcontrolling\b|\bcontrol de gestion\b|\bfp&a\b"),
            ("tesorería", r"\btesoreria\b|\btreasury\b"),
            ("fiscalidad", r"\bfiscal\b|\btax\b|\bimpuestos\b"),
            ("auditoría", r"\baudit(ing|oria)?\b|\bauditor(a)?\b"),
            ("riesgos", r"\bcredit(o)?\b|\bcobros\b|\brisk\b|\briesgos?\b"),
        ],
        specials: &[
            (r"\btreasurer\b|\btesorer(o|a)\b", "tesoreros"),
            (r"\bfinancial controller\b|\bcontroller financier(o|a)\b", "controllers financieros"),
        ],
    },
    DepartmentSpec {
        department: Department::HumanResources,
        must: &[
            r"\brr\.? ?hh\b|\brecursos humanos\b|\bhuman resources?\b|\bhr\b|\bhrbp\b",
            r"\bpeople\b|\btalent(o)?\b|\bcultur(a|e)\b",
            r"\bseleccion\b|\brecruit(ing|ment|er)?\b|\bcontratacion\b",
            r"\b(administracion|gestion|departamento) de personal\b|\bpersonnel\b",
            r"\bnominas?\b|\bpayroll\b|\bcompensa(tion|cion)\b|\bbenefits\b",
            r"\bformacion\b|\bformador(a)?\b|\blearning (and|&) development\b|\bl&d\b",
            r"\brelaciones laborales\b|\blabou?r relations\b",
        ],
        seniority: &[
            SENIOR,
            MANAGER,
            LEAD,
            r"\bhrbp\b|\bbusiness partner\b",
            r"\bgeneralista?\b",
            r"\btecnic(o|a)\b|\btechnician\b",
            r"\badministrativ(o|a)\b|\badministracion\b",
            r"\bencargad(o|a)\b|\bformador(a)?\b",
            r"\btalent acquisition\b|\badquisicion de talento\b",
            r"\bdesarrollo\b|\bpuestos\b",
        ],
        exclude: &[JUNIOR, TRAINEE, ASSISTANT],
        areas: &[
            ("selección", r"\bseleccion\b|\brecruit(ing|ment|er)?\b|\bcontratacion\b|\btalent acquisition\b|\badquisicion de talento\b"),
            ("formación", r"\bformacion\b|\bformador(a)?\b|\btraining\b|\blearning\b|\bl&d\b"),
            ("compensación y beneficios", r"\bcompensa(tion|cion)\b|\bbenefits\b|\bbeneficios\b|\bnominas?\b|\bpayroll\b"),
            ("relaciones laborales", r"\brelaciones laborales\b|\blabou?r relations\b"),
            ("talento", r"\btalent(o)?\b"),
            ("personas", r"\bpeople\b|\bpersonas\b|\bcultur(a|e)\b"),
        ],
        specials: &[
            (
                r"\bhrbp\b|\b(hr|people|rrhh) business partner\b|\bbusiness partner de (rrhh|recursos humanos)\b",
                "HR business partners",
            ),
            (r"\bgeneralista?\b", "generalistas de recursos humanos"),
            (r"\btalent acquisition\b|\badquisicion de talento\b", "responsables de adquisición de talento"),
        ],
    },
    DepartmentSpec {
        department: Department::Legal,
        must: &[
            r"\blegal\b",
            r"\bjuridic(o|a)\b|\blawyer\b|\babogad(o|a)\b|\bletrad(o|a)\b|\bcounsel\b",
            r"\bcompliance\b|\bcumplimiento\b|\bregulatory\b|\bregulatorio\b",
            r"\bdpo\b|\bdata protection officer\b|\bproteccion de datos\b|\bprivacy\b|\bprivacidad\b",
        ],
        seniority: &[
            SENIOR,
            MANAGER,
            LEAD,
            r"\bgeneral counsel\b",
            r"\bdpo\b|\bdata protection officer\b|\bdelegad(o|a) de proteccion de datos\b",
            r"\bcompliance officer\b",
        ],
        exclude: &[JUNIOR, TRAINEE, ASSISTANT, r"\bparalegal\b"],
        areas: &[
            ("cumplimiento normativo", r"\bcompliance\b|\bcumplimiento\b|\bregulatory\b|\bregulatorio\b"),
            ("protección de datos", r"\bprivacy\b|\bprivacidad\b|\bproteccion de datos\b|\bdpo\b"),
            ("asesoría jurídica", r"\bjuridic(o|a)\b|\bcounsel\b|\blawyer\b|\babogad(o|a)\b"),
        ],
        specials: &[
            (r"\bgeneral counsel\b", "general counsels"),
            (
                r"\bdpo\b|\bdata protection officer\b|\bdelegad(o|a) de proteccion de datos\b",
                "delegados de protección de datos",
            ),
            (r"\bcompliance officer\b", "compliance officers"),
        ],
    },
    DepartmentSpec {
        department: Department::Operations,
        must: &[
            r"\boperations\b|\boperaciones\b|\bops\b",
            r"\blogistics?\b|\blogistica\b|\bwarehouse\b|\balmacen\b",
            r"\bsupply chain\b|\bcadena de suministro\b",
            r"\bproduction\b|\bproduccion\b|\bmanufacturing\b|\bfabricacion\b|\bplanta?\b",
            r"\bquality\b|\bcalidad\b",
            r"\bprocurement\b|\bpurchasing\b|\bcompras\b|\bbuyer\b",
            r"\bmaintenance\b|\bmantenimiento\b",
            r"\bfacilities\b|\bservicios generales\b",
            r"\bcustomer (service|success|care)\b|\batencion al cliente\b",
        ],
        seniority: &[
            SENIOR,
            MANAGER,
            LEAD,
            r"\bsupervisor(a)?\b",
            r"\bcoordinador(a)?\b|\bcoordinator\b",
            r"\bencargad(o|a)\b",
        ],
        exclude: &[
            JUNIOR,
            TRAINEE,
            ASSISTANT,
            r"\boperari(o|a)\b|\bmozo\b|\bpeon\b|\bcarretiller(o|a)\b|\bforklift\b",
            r"\bagent\b|\bagente\b",
        ],
        areas: &[
            ("logística", r"\blogistics?\b|\blogistica\b|\bwarehouse\b|\balmacen\b"),
            ("cadena de suministro", r"\bsupply chain\b|\bcadena de suministro\b"),
            ("producción", r"\bproduction\b|\bproduccion\b|\bmanufacturing\b|\bfabricacion\b|\bplanta?\b"),
            ("calidad", r"\bquality\b|\bcalidad\b"),
            ("compras", r"\bprocurement\b|\bpurchasing\b|\bcompras\b|\bbuyer\b"),
            ("mantenimiento", r"\bmaintenance\b|\bmantenimiento\b"),
            ("atención al cliente", r"\bcustomer (service|success|care)\b|\batencion al cliente\b"),
            ("servicios generales", r"\bfacilities\b|\bservicios generales\b"),
        ],
        specials: &[
            (r"\bplant manager\b|\b(director(a)?|gerente|jef(e|a)) de planta\b", "directores de planta"),
            (r"\bcustomer success manager\b", "customer success managers"),
        ],
    },
    DepartmentSpec {
        department: Department::Product,
        must: &[r"\bproducts?\b|\bproductos?\b"],
        seniority: &[SENIOR, MANAGER, LEAD, r"\bproduct owner\b"],
        exclude: &[
            JUNIOR,
            TRAINEE,
            ASSISTANT,
            r"\bdesign(er)?\b|\bdisenador(a)?\b",
            r"\banalyst\b|\banalista\b",
        ],
        areas: &[("producto digital", r"\bdigital\b")],
        specials: &[
            (r"\bproduct owner\b", "product owners"),
            (r"\bproduct manager\b|\bgerente de producto\b", "product managers"),
        ],
    },
    DepartmentSpec {
        department: Department::Projects,
        must: &[r"\bprojects?\b|\bproyectos?\b|\bpmo\b", r"\bprogram(me)?s?\b|\bprogramas?\b"],
        seniority: &[SENIOR, MANAGER, LEAD, r"\bcoordinador(a)?\b|\bcoordinator\b", r"\bgestor(a)?\b"],
        exclude: &[JUNIOR, TRAINEE, ASSISTANT],
        areas: &[
            ("proyectos", r"\bprojects?\b|\bproyectos?\b|\bpmo\b"),
            ("programas", r"\bprogram(me)?s?\b|\bprogramas?\b"),
        ],
        specials: &[
            (r"\bpmo\b", "responsables de PMO"),
            (r"\bprogram(me)? manager\b", "program managers"),
        ],
    },
];
