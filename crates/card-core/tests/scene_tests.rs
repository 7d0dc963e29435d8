// Host-side tests for heart motion and mesh generation.

use card_core::scene::*;
use glam::{Vec3, Vec4};

#[test]
fn seven_hearts_at_their_base_positions() {
    let field = HeartField::new(1);
    assert_eq!(field.len(), 7);
    for (h, base) in field.hearts.iter().zip(HEART_BASE_POSITIONS) {
        assert_eq!(h.base, Vec3::from_array(base));
    }
}

#[test]
fn bob_follows_sine_of_time_plus_x() {
    for &(t, x) in &[(0.0_f32, 0.0_f32), (1.3, -3.0), (10.0, 4.0)] {
        let expected = (t + x).sin() * 0.3;
        assert!((bob_offset(t, x) - expected).abs() < 1e-6);
    }
    // bounded by the amplitude
    for i in 0..200 {
        assert!(bob_offset(i as f32 * 0.1, 2.0).abs() <= BOB_AMPLITUDE + 1e-6);
    }
}

#[test]
fn spin_is_proportional_to_time() {
    assert_eq!(spin_angle(0.0), 0.0);
    assert!((spin_angle(10.0) - 3.0).abs() < 1e-6);
}

#[test]
fn instances_stay_near_their_base() {
    let field = HeartField::new(2);
    for i in 0..100 {
        let t = i as f32 * 0.37;
        for (h, m) in field.hearts.iter().zip(field.models(t)) {
            let center = m.transform_point3(Vec3::ZERO);
            // bob + float lift + wobble of the whole offset
            assert!(center.distance(h.base) < 1.5, "t={t} drift={}", center.distance(h.base));
        }
    }
}

#[test]
fn instances_move_over_time() {
    let field = HeartField::new(3);
    let a = field.models(0.0);
    let b = field.models(1.0);
    for (ma, mb) in a.iter().zip(&b) {
        assert_ne!(ma, mb);
    }
}

#[test]
fn heart_outline_is_closed_without_duplicates() {
    let outline = heart_outline(CURVE_SEGMENTS);
    assert!(outline.len() > 6 * (CURVE_SEGMENTS - 2));
    for w in outline.windows(2) {
        assert!(w[0].distance(w[1]) > 1e-5);
    }
    let first = outline[0];
    let last = *outline.last().unwrap();
    assert!(first.distance(last) > 1e-5);
}

#[test]
fn heart_mesh_indices_are_valid() {
    let mesh = heart_mesh(CURVE_SEGMENTS, EXTRUDE_DEPTH);
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len());
    }
    for v in &mesh.vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(v.position[2].abs() <= EXTRUDE_DEPTH * 0.5 + 1e-6);
    }
}

#[test]
fn heart_is_flipped_tip_down() {
    let mesh = heart_mesh(CURVE_SEGMENTS, EXTRUDE_DEPTH);
    let lowest = mesh
        .vertices
        .iter()
        .min_by(|a, b| a.position[1].total_cmp(&b.position[1]))
        .unwrap();
    // the tip sits on the vertical axis
    assert!(lowest.position[0].abs() < 0.05);
    assert!(lowest.position[1] < -0.8);
}

#[test]
fn camera_sees_the_origin() {
    let vp = view_projection(16.0 / 9.0);
    let clip = vp * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
