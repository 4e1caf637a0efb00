//! End-to-end classification through the public `Classifier` API.

use std::sync::OnceLock;

use icp_classifier::rules::tables::FAST_PATH_TITLES;
use icp_classifier::{Classifier, ClassifierConfig, ExcludeSet, Stage, Why};
use pretty_assertions::assert_eq;

fn classifier() -> &'static Classifier {
    static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();
    CLASSIFIER.get_or_init(|| Classifier::new(ClassifierConfig::default()).expect("rule tables compile"))
}

fn classify(title: &str) -> icp_classifier::ClassificationRecord {
    classifier().classify(title, &ExcludeSet::none())
}

#[test]
fn test_marketing_and_sales_tie_break() {
    let rec = classify("Marketing and Sales Manager");
    assert!(rec.is_icp);
    assert_eq!(rec.department, "Marketing");
    assert_eq!(rec.role_generic, "gerentes de marketing");
    assert_eq!(rec.role_generic_singular, "gerente de marketing");
}

#[test]
fn test_owner_who_is_ceo() {
    let rec = classify("Founder & CEO");
    assert_eq!(rec.role_generic, "CEOs");
    assert_eq!(rec.role_generic_singular, "CEO");
    assert_eq!(rec.department, "Executive");
    assert_eq!(rec.hierarchy_level, "C-Suite");
    assert_eq!(rec.subdivision, "General");
}

#[test]
fn test_standalone_department() {
    let rec = classify("Marketing");
    assert_eq!(rec.department, "Marketing");
    assert_eq!(rec.role_generic, "responsables de marketing");
}

#[test]
fn test_solo_title() {
    let rec = classify("Director");
    assert_eq!(rec.department, "Executive");
    assert_eq!(rec.role_generic, "directores");
    assert_eq!(rec.role_generic_singular, "director");
    assert_eq!(rec.hierarchy_level, "VP/Director");
}

#[test]
fn test_no_match() {
    let rec = classify("Astronaut");
    assert!(!rec.is_icp);
    assert_eq!(rec.why, Why::no_match());
    assert_eq!(rec.department, "");
    assert_eq!(rec.subdivision, "");
    assert_eq!(rec.hierarchy_level, "");
    assert_eq!(rec.role_generic, "");
}

#[test]
fn test_empty_title_is_not_icp() {
    let rec = classify("   ");
    assert!(!rec.is_icp);
    assert!(rec.why.no_match);
}

#[test]
fn test_exclude_veto_beats_c_suite() {
    let excludes = ExcludeSet::parse(Some("founder")).unwrap();
    let rec = classifier().classify("Founder & CEO", &excludes);
    assert!(!rec.is_icp);
    assert_eq!(rec.why, Why::excluded());
}

#[test]
fn test_record_taxonomy_fields() {
    let rec = classify("Head of Data");
    assert_eq!(rec.department, "Technology");
    assert_eq!(rec.subdivision, "Data");
    assert_eq!(rec.hierarchy_level, "VP/Director");
    assert_eq!(rec.role_generic, "directores de datos");
    assert_eq!(rec.why.stage, Some(Stage::Department));
}

#[test]
fn test_accents_and_case_do_not_matter() {
    let a = classify("DIRECTORA DE TECNOLOGÍA");
    let b = classify("directora de tecnologia");
    assert_eq!(a.role_generic, b.role_generic);
    assert_eq!(a.role_generic, "directores de tecnología");
}

#[test]
fn test_special_labels_are_returned_verbatim() {
    let cases = [
        ("Brand Manager", "brand managers"),
        ("Product Marketing Manager", "product marketing managers"),
        ("Growth Manager", "responsables de growth"),
        ("Key Account Manager", "key account managers"),
        ("Director Comercial", "directores comerciales"),
        ("Tech Lead", "líderes técnicos"),
        ("Technical Director", "directores técnicos"),
        ("Technical Manager", "responsables técnicos"),
        ("Engineering Manager", "engineering managers"),
        ("Tesorero", "tesoreros"),
        ("Financial Controller", "controllers financieros"),
        ("HR Business Partner", "HR business partners"),
        ("Generalista de RRHH", "generalistas de recursos humanos"),
        ("Talent Acquisition Manager", "responsables de adquisición de talento"),
        ("General Counsel", "general counsels"),
        ("DPO", "delegados de protección de datos"),
        ("Compliance Officer", "compliance officers"),
        ("Plant Manager", "directores de planta"),
        ("Customer Success Manager", "customer success managers"),
        ("Product Owner", "product owners"),
        ("Product Manager", "product managers"),
        ("Responsable PMO", "responsables de PMO"),
        ("Program Manager", "program managers"),
    ];
    for (title, label) in cases {
        let rec = classify(title);
        assert_eq!(rec.role_generic, label, "title: {title}");
        assert!(!rec.role_generic_singular.is_empty(), "title: {title}");
    }
}

#[test]
fn test_generic_singular_keeps_first_word_prefix() {
    let titles = [
        "Head of Sales",
        "Jefa de Compras",
        "Coordinador de Proyectos",
        "CFO",
        "VP",
        "Supervisor",
        "Director de Recursos Humanos",
        "Responsable de Contabilidad",
    ];
    for title in titles {
        let rec = classify(title);
        assert!(rec.is_icp, "title: {title}");
        let plural = rec.role_generic.split(' ').next().unwrap_or_default();
        let singular = rec.role_generic_singular.split(' ').next().unwrap_or_default();
        assert!(plural.starts_with(singular), "{plural} / {singular}");
        assert!(singular.len() < plural.len(), "{plural} / {singular}");
    }
}

#[test]
fn test_fast_path_agrees_with_full_pipeline() {
    let full = Classifier::new(ClassifierConfig::uncached()).unwrap();
    let fast = Classifier::new(ClassifierConfig::uncached().with_fast_path(true)).unwrap();
    for title in FAST_PATH_TITLES {
        let mut hit = fast.classify(title, &ExcludeSet::none());
        assert!(hit.why.fast_path, "title: {title}");
        hit.why.fast_path = false;
        assert_eq!(hit, full.classify(title, &ExcludeSet::none()));
    }
}

#[test]
fn test_fast_path_respects_excludes() {
    let excludes = ExcludeSet::parse(Some("manager")).unwrap();
    let rec = classifier().classify("Marketing Manager", &excludes);
    assert!(!rec.is_icp);
}

#[test]
fn test_symbol_only_exclude_vetoes_nothing() {
    for csv in ["🚀", "€", "·, €"] {
        let excludes = ExcludeSet::parse(Some(csv)).unwrap();
        assert!(classifier().classify("CEO", &excludes).is_icp, "excludes: {csv}");
        assert!(classifier().classify("Head of Marketing", &excludes).is_icp, "excludes: {csv}");
    }
}

#[test]
fn test_country_manager_shares_general_manager_tier() {
    let country = classify("Country Manager");
    let general = classify("General Manager");
    assert_eq!(country.role_generic, "directores generales");
    assert_eq!(country.hierarchy_level, general.hierarchy_level);
    assert_eq!(country.hierarchy_level, "C-Suite");
}

#[test]
fn test_gestor_de_proyectos() {
    let rec = classify("Gestor de Proyectos");
    assert!(rec.is_icp);
    assert_eq!(rec.role_generic, "gestores de proyectos");
    assert_eq!(rec.role_generic_singular, "gestor de proyectos");
    assert_eq!(rec.hierarchy_level, "Manager");
}

#[test]
fn test_shared_classifier_across_threads() {
    const TITLES: &[&str] = &[
        "CEO",
        "Founder & CEO",
        "Head of Data",
        "Marketing and Sales Manager",
        "Director Comercial",
        "Project Manager",
        "Gestor de Proyectos",
        "Responsable de Contabilidad",
        "DIRECTORA DE TECNOLOGÍA",
        "Astronaut",
        "Country Manager",
        "Junior Project Manager",
    ];
    let reference = Classifier::new(ClassifierConfig::uncached().with_fast_path(true)).unwrap();
    let expected: Vec<_> = TITLES.iter().map(|t| reference.classify(t, &ExcludeSet::none())).collect();

    let shared = Classifier::new(ClassifierConfig {
        result_cache_size: 4,
        normaliser_cache_size: 6,
        fast_path: true,
    })
    .unwrap();

    std::thread::scope(|s| {
        for worker in 0..8 {
            let shared = &shared;
            let expected = &expected;
            s.spawn(move || {
                for round in 0..25 {
                    let i = (worker + round) % TITLES.len();
                    assert_eq!(shared.classify(TITLES[i], &ExcludeSet::none()), expected[i], "title: {}", TITLES[i]);
                }
            });
        }
    });

    let stats = shared.stats();
    assert!(stats.result_entries <= stats.result_capacity);
    assert!(stats.normaliser_entries <= stats.normaliser_capacity);
    assert_eq!(stats.result_hits + stats.result_misses, 8 * 25);
}

#[test]
fn test_classify_many() {
    let recs = classifier().classify_many(&["CEO", "Astronaut"], &ExcludeSet::none());
    assert_eq!(recs.len(), 2);
    assert!(recs[0].is_icp);
    assert!(!recs[1].is_icp);
}

#[test]
fn test_technology_titles_regression() {
    let cases = [
        ("Area Technical Manager", "Technology", "responsables técnicos"),
        ("Chief Information Technology Officer", "Technology", "CIOs"),
        ("Chief of Technology Transference & Venture Building", "Technology", "CTOs"),
        ("Chief Product and Technology Officer", "Technology", "CTOs"),
        ("Corporate Technical Director", "Technology", "directores técnicos"),
        ("CTTO", "Technology", "CTOs"),
        ("CQA", "Operations", "CQAs"),
        ("Director del Área de Proyectos", "Technology", "directores de proyectos"),
        ("Director del área de tecnología", "Technology", "directores de tecnología"),
        ("Director Organización y Tecnología", "Technology", "directores de tecnología"),
        ("Fullstack Technical Lead", "Technology", "líderes técnicos"),
        ("Head of Project", "Technology", "directores de proyectos"),
        ("Jefe de Tecnología", "Technology", "jefes de tecnología"),
        ("Lead Android Engineer", "Technology", "líderes técnicos"),
        ("Manager Technical Support", "Technology", "responsables técnicos"),
        ("Project Developer Manager", "Technology", "gerentes de desarrollo"),
        ("Project Technical Leader", "Technology", "líderes técnicos"),
        ("Quality Assurance & Technical Service Manager", "Technology", "gerentes de calidad"),
        ("Responsable de tecnología de la información", "Technology", "responsables de tecnología"),
        ("Senior Project Development Manager", "Technology", "gerentes de desarrollo"),
        ("Tech Leader", "Technology", "líderes técnicos"),
        ("Technical Chief", "Technology", "directores técnicos"),
        ("VP of Engineering", "Technology", "vicepresidentes de ingeniería"),
    ];
    for (title, department, role) in cases {
        let rec = classify(title);
        assert!(rec.is_icp, "title: {title}");
        assert_eq!((rec.department.as_str(), rec.role_generic.as_str()), (department, role), "title: {title}");
    }
}
