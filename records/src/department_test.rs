use super::*;

#[test]
fn totals_sum_sample_set() {
    let totals = DepartmentTotals::from_departments(&SAMPLE_DEPARTMENTS);
    assert_eq!(totals.departments, 6);
    assert_eq!(totals.employees, 123);
    assert_eq!(totals.budget, 7_900_000);
}

#[test]
fn search_covers_name_description_and_head() {
    assert_eq!(search(&SAMPLE_DEPARTMENTS, "engineering")[0].id, "2");
    assert_eq!(search(&SAMPLE_DEPARTMENTS, "ROBERT")[0].id, "6");
    assert_eq!(search(&SAMPLE_DEPARTMENTS, "accounting")[0].id, "4");
    assert_eq!(search(&SAMPLE_DEPARTMENTS, "").len(), 6);
    assert!(search(&SAMPLE_DEPARTMENTS, "zzz").is_empty());
}

#[test]
fn format_usd_groups_thousands() {
    assert_eq!(format_usd(0), "$0");
    assert_eq!(format_usd(950), "$950");
    assert_eq!(format_usd(850_000), "$850,000");
    assert_eq!(format_usd(2_500_000), "$2,500,000");
    assert_eq!(format_usd(7_900_000), "$7,900,000");
}
