//! Department directory. Not yet backed by a table; the account page works
//! from the sample set below.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Department {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub head_of_department: &'static str,
    pub employee_count: u32,
    /// Annual budget in whole US dollars.
    pub budget: u64,
    pub created_at: &'static str,
    pub updated_at: &'static str,
}

pub const SAMPLE_DEPARTMENTS: [Department; 6] = [
    Department {
        id: "1",
        name: "Human Resources",
        description: "Manages recruitment, employee relations, and organizational development",
        head_of_department: "Sarah Johnson",
        employee_count: 12,
        budget: 850_000,
        created_at: "2024-01-15T10:00:00Z",
        updated_at: "2024-01-15T10:00:00Z",
    },
    Department {
        id: "2",
        name: "Engineering",
        description: "Software development, technical architecture, and product innovation",
        head_of_department: "Michael Chen",
        employee_count: 45,
        budget: 2_500_000,
        created_at: "2024-01-10T09:00:00Z",
        updated_at: "2024-01-20T14:30:00Z",
    },
    Department {
        id: "3",
        name: "Marketing",
        description: "Brand management, digital marketing, and customer acquisition",
        head_of_department: "Emily Rodriguez",
        employee_count: 18,
        budget: 1_200_000,
        created_at: "2024-01-12T11:00:00Z",
        updated_at: "2024-01-18T16:45:00Z",
    },
    Department {
        id: "4",
        name: "Finance",
        description: "Financial planning, accounting, and budget management",
        head_of_department: "David Thompson",
        employee_count: 8,
        budget: 600_000,
        created_at: "2024-01-08T08:00:00Z",
        updated_at: "2024-01-22T12:15:00Z",
    },
    Department {
        id: "5",
        name: "Sales",
        description: "Customer acquisition, relationship management, and revenue growth",
        head_of_department: "Lisa Wang",
        employee_count: 25,
        budget: 1_800_000,
        created_at: "2024-01-05T07:30:00Z",
        updated_at: "2024-01-25T09:20:00Z",
    },
    Department {
        id: "6",
        name: "Operations",
        description: "Process optimization, quality assurance, and operational efficiency",
        head_of_department: "Robert Kim",
        employee_count: 15,
        budget: 950_000,
        created_at: "2024-01-20T13:00:00Z",
        updated_at: "2024-01-28T11:30:00Z",
    },
];

/// Case-insensitive match on name, description, or head of department.
#[must_use]
pub fn search<'a>(departments: &'a [Department], term: &str) -> Vec<&'a Department> {
    let needle = term.to_lowercase();
    departments
        .iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&needle)
                || d.description.to_lowercase().contains(&needle)
                || d.head_of_department.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Roll-up figures shown in the stats row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepartmentTotals {
    pub departments: usize,
    pub employees: u32,
    pub budget: u64,
}

impl DepartmentTotals {
    #[must_use]
    pub fn from_departments(departments: &[Department]) -> Self {
        Self {
            departments: departments.len(),
            employees: departments.iter().map(|d| d.employee_count).sum(),
            budget: departments.iter().map(|d| d.budget).sum(),
        }
    }
}

/// Whole-dollar USD with thousands separators, e.g. `$2,500,000`.
#[must_use]
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

#[cfg(test)]
#[path = "department_test.rs"]
mod department_test;
