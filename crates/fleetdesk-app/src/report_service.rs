//! Reporting - read-only summaries over the stored collections

use serde::Serialize;

use fleetdesk_domain::model::{Assignment, AssignmentStatus, Driver, DriverStatus, Shift};

/// Assignment count for one driver
#[derive(Debug, Clone, Serialize)]
pub struct DriverAssignmentCount {
    pub driver_id: String,
    pub driver_name: String,
    pub assignments: usize,
}

/// Day/Night split of active drivers
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ShiftDistribution {
    pub day: usize,
    pub night: usize,
}

/// The dashboard counters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardStats {
    pub total_drivers: usize,
    pub active_drivers: usize,
    pub on_leave_drivers: usize,
    pub total_pickup_points: usize,
    pub total_assignments: usize,
    pub completed_assignments: usize,
    pub in_progress_assignments: usize,
    pub pending_assignments: usize,
}

/// Count assignments per driver. Assignments referencing a driver id
/// with no driver record are not attributed to anyone here; the list
/// views render those with an "N/A" driver name instead.
pub fn assignments_per_driver(
    drivers: &[Driver],
    assignments: &[Assignment],
) -> Vec<DriverAssignmentCount> {
    drivers
        .iter()
        .map(|driver| DriverAssignmentCount {
            driver_id: driver.id.clone(),
            driver_name: driver.name.clone(),
            assignments: assignments
                .iter()
                .filter(|a| a.driver_id == driver.id)
                .count(),
        })
        .collect()
}

/// Shift split over active drivers only
pub fn shift_distribution(drivers: &[Driver]) -> ShiftDistribution {
    let mut dist = ShiftDistribution::default();
    for driver in drivers {
        if driver.status != DriverStatus::Active {
            continue;
        }
        match driver.shift {
            Shift::Day => dist.day += 1,
            Shift::Night => dist.night += 1,
        }
    }
    dist
}

/// Headline counters for the dashboard
pub fn dashboard_stats(
    drivers: &[Driver],
    points_count: usize,
    assignments: &[Assignment],
) -> DashboardStats {
    let active = drivers
        .iter()
        .filter(|d| d.status == DriverStatus::Active)
        .count();

    let by_status = |status: AssignmentStatus| {
        assignments.iter().filter(|a| a.status == status).count()
    };

    DashboardStats {
        total_drivers: drivers.len(),
        active_drivers: active,
        on_leave_drivers: drivers.len() - active,
        total_pickup_points: points_count,
        total_assignments: assignments.len(),
        completed_assignments: by_status(AssignmentStatus::Completed),
        in_progress_assignments: by_status(AssignmentStatus::InProgress),
        pending_assignments: by_status(AssignmentStatus::Pending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: &str, shift: Shift, status: DriverStatus) -> Driver {
        Driver {
            id: id.to_string(),
            name: format!("Driver {id}"),
            shift,
            holiday_date: "2024-11-03".to_string(),
            phone: "N/A".to_string(),
            license_type: "N/A".to_string(),
            status,
            current_location: None,
        }
    }

    fn assignment(driver_id: &str, status: AssignmentStatus) -> Assignment {
        Assignment {
            id: format!("A-{driver_id}-{status}"),
            driver_id: driver_id.to_string(),
            pickup_point_id: "P1".to_string(),
            assignment_date: "2024-10-31".to_string(),
            status,
            notes: String::new(),
        }
    }

    #[test]
    fn counts_assignments_per_driver() {
        let drivers = vec![
            driver("1", Shift::Day, DriverStatus::Active),
            driver("2", Shift::Night, DriverStatus::Active),
        ];
        let assignments = vec![
            assignment("1", AssignmentStatus::Pending),
            assignment("1", AssignmentStatus::Completed),
            assignment("dangling", AssignmentStatus::Pending),
        ];

        let counts = assignments_per_driver(&drivers, &assignments);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].assignments, 2);
        assert_eq!(counts[1].assignments, 0);
    }

    #[test]
    fn shift_distribution_skips_inactive_drivers() {
        let drivers = vec![
            driver("1", Shift::Day, DriverStatus::Active),
            driver("2", Shift::Night, DriverStatus::Active),
            driver("3", Shift::Day, DriverStatus::Inactive),
        ];

        let dist = shift_distribution(&drivers);
        assert_eq!(dist.day, 1);
        assert_eq!(dist.night, 1);
    }

    #[test]
    fn dashboard_counters() {
        let drivers = vec![
            driver("1", Shift::Day, DriverStatus::Active),
            driver("2", Shift::Night, DriverStatus::Inactive),
        ];
        let assignments = vec![
            assignment("1", AssignmentStatus::Completed),
            assignment("1", AssignmentStatus::InProgress),
            assignment("2", AssignmentStatus::Pending),
            assignment("2", AssignmentStatus::Pending),
        ];

        let stats = dashboard_stats(&drivers, 7, &assignments);
        assert_eq!(stats.total_drivers, 2);
        assert_eq!(stats.active_drivers, 1);
        assert_eq!(stats.on_leave_drivers, 1);
        assert_eq!(stats.total_pickup_points, 7);
        assert_eq!(stats.total_assignments, 4);
        assert_eq!(stats.completed_assignments, 1);
        assert_eq!(stats.in_progress_assignments, 1);
        assert_eq!(stats.pending_assignments, 2);
    }
}
