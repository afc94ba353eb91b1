//! Bundled sample dataset used by `fleetdesk reset`
//!
//! Ported from the legacy web app's seed data so a fresh install has
//! something to look at.

use fleetdesk_domain::model::{
    Assignment, AssignmentStatus, Driver, DriverStatus, LatLng, PickupPoint, Shift,
};

fn driver(
    id: &str,
    name: &str,
    shift: Shift,
    holiday_date: &str,
    phone: &str,
    license_type: &str,
    status: DriverStatus,
    current_location: Option<(f64, f64)>,
) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        shift,
        holiday_date: holiday_date.to_string(),
        phone: phone.to_string(),
        license_type: license_type.to_string(),
        status,
        current_location: current_location.map(|(lat, lng)| LatLng { lat, lng }),
    }
}

fn point(
    id: &str,
    group_name: &str,
    name: &str,
    address: &str,
    gps: (f64, f64),
    contact_person: &str,
    contact_phone: &str,
) -> PickupPoint {
    PickupPoint {
        id: id.to_string(),
        group_name: group_name.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        gps: LatLng {
            lat: gps.0,
            lng: gps.1,
        },
        contact_person: contact_person.to_string(),
        contact_phone: contact_phone.to_string(),
    }
}

fn assignment(
    id: &str,
    driver_id: &str,
    pickup_point_id: &str,
    assignment_date: &str,
    status: AssignmentStatus,
    notes: &str,
) -> Assignment {
    Assignment {
        id: id.to_string(),
        driver_id: driver_id.to_string(),
        pickup_point_id: pickup_point_id.to_string(),
        assignment_date: assignment_date.to_string(),
        status,
        notes: notes.to_string(),
    }
}

pub fn sample_drivers() -> Vec<Driver> {
    vec![
        driver(
            "6554",
            "อุเทนชัย เข้มสุข",
            Shift::Day,
            "2024-11-03",
            "081-234-5678",
            "CDL-A",
            DriverStatus::Active,
            Some((13.7650, 100.5115)),
        ),
        driver(
            "9037",
            "มงคล พึ่งผ่อง",
            Shift::Night,
            "2024-11-03",
            "082-345-6789",
            "CDL-B",
            DriverStatus::Active,
            Some((13.7458, 100.5220)),
        ),
        driver(
            "9343",
            "อนันต์ ดวงฤทธิ์",
            Shift::Day,
            "2024-11-02",
            "083-456-7890",
            "CDL-A",
            DriverStatus::Inactive,
            None,
        ),
        driver(
            "24099",
            "วิรัตน์ ปางบางกระดี่",
            Shift::Night,
            "2024-11-02",
            "084-567-8901",
            "CDL-C",
            DriverStatus::Active,
            None,
        ),
        driver(
            "1005",
            "สมชาย ใจดี",
            Shift::Day,
            "2024-11-09",
            "085-678-9012",
            "CDL-A",
            DriverStatus::Active,
            Some((13.7500, 100.4900)),
        ),
    ]
}

pub fn sample_pickup_points() -> Vec<PickupPoint> {
    vec![
        point(
            "PUP2025102408BH4",
            "[S] HBKTH (4W) -03",
            "คลังสินค้า A",
            "123 ถนนเหนือ, เมือง",
            (13.7563, 100.5018),
            "ผู้จัดการ A",
            "02-111-2222",
        ),
        point(
            "PUP202510240KL14",
            "[S] HBKTH (4W) -03",
            "N/A (ไม่พบข้อมูล)",
            "456 ถนนเหนือ, เมือง",
            (13.7570, 100.5020),
            "ผู้ดูแล B",
            "02-222-3333",
        ),
        point(
            "PUP2024060402609",
            "[S] HBKTH (4W) -03",
            "JQ",
            "789 ถนนใต้, เมือง",
            (13.7550, 100.5000),
            "หัวหน้า C",
            "02-333-4444",
        ),
        point(
            "PUP202509110H1N0",
            "[S] HBKTH (4W) -03",
            "FURNITURELIGHTING",
            "101 ถนนตะวันออก, เมือง",
            (13.7565, 100.5035),
            "เจ้าของ D",
            "02-444-5555",
        ),
        point(
            "PUP2022091406FCK",
            "[S] HBKTH (4W) -04",
            "hardware8",
            "212 ถนนใต้, เมือง",
            (13.7540, 100.5005),
            "เสมียน E",
            "02-555-6666",
        ),
        point(
            "PUP2023120203AFR",
            "[S] HBKTH (4W) -04",
            "N/A (ไม่พบข้อมูล)",
            "333 ถนนตะวันตก, เมือง",
            (13.7580, 100.5040),
            "ผู้ควบคุม F",
            "02-666-7777",
        ),
        point(
            "PUP202510230KHQP",
            "ไม่มีกลุ่ม",
            "N/A (ไม่พบข้อมูล)",
            "111 ถนนหลัก, เมือง",
            (13.7590, 100.5050),
            "G",
            "02-777-8888",
        ),
    ]
}

pub fn sample_assignments() -> Vec<Assignment> {
    vec![
        assignment(
            "A001",
            "6554",
            "PUP2025102408BH4",
            "2024-10-31",
            AssignmentStatus::Completed,
            "ส่งตรงเวลา",
        ),
        assignment(
            "A002",
            "6554",
            "PUP202510240KL14",
            "2024-10-31",
            AssignmentStatus::Completed,
            "",
        ),
        assignment(
            "A003",
            "9037",
            "PUP202510230KHQP",
            "2024-10-31",
            AssignmentStatus::InProgress,
            "ล่าช้าเล็กน้อยเนื่องจากการจราจร",
        ),
        assignment(
            "A004",
            "24099",
            "PUP2024060402609",
            "2024-10-31",
            AssignmentStatus::Pending,
            "กำหนดรับช่วงเย็น",
        ),
        assignment(
            "A005",
            "1005",
            "PUP202509110H1N0",
            "2024-10-31",
            AssignmentStatus::Pending,
            "",
        ),
        assignment(
            "A006",
            "9343",
            "PUP2022091406FCK",
            "2024-10-31",
            AssignmentStatus::Pending,
            "",
        ),
        assignment(
            "A007",
            "6554",
            "PUP2023120203AFR",
            "2024-10-31",
            AssignmentStatus::Pending,
            "",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_per_collection() {
        let drivers: HashSet<_> = sample_drivers().into_iter().map(|d| d.id).collect();
        assert_eq!(drivers.len(), 5);

        let points: HashSet<_> = sample_pickup_points().into_iter().map(|p| p.id).collect();
        assert_eq!(points.len(), 7);

        let assignments: HashSet<_> = sample_assignments().into_iter().map(|a| a.id).collect();
        assert_eq!(assignments.len(), 7);
    }

    #[test]
    fn sample_assignments_reference_sample_records() {
        let driver_ids: HashSet<_> = sample_drivers().into_iter().map(|d| d.id).collect();
        let point_ids: HashSet<_> = sample_pickup_points().into_iter().map(|p| p.id).collect();

        for a in sample_assignments() {
            assert!(driver_ids.contains(&a.driver_id));
            assert!(point_ids.contains(&a.pickup_point_id));
        }
    }
}
