use approx::assert_relative_eq;
use lamina_solver::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fiber() -> Material {
    Material::orthotropic(
        [233e9, 23.1e9, 23.1e9],
        [0.4, 0.2, 0.2],
        [8.27e9, 8.96e9, 8.96e9],
    )
    .unwrap()
    .with_alpha([-0.54e-6, 10.10e-6, 10.10e-6])
    .unwrap()
    .with_name("fiber")
}

fn matrix() -> Material {
    Material::isotropic(4.62e9, 0.36)
        .unwrap()
        .with_alpha(41.4e-6)
        .unwrap()
        .with_name("matrix")
}

fn carbon_epoxy_ply() -> Lamina {
    let def = LaminaDefinition::from_constituents(fiber(), matrix(), 0.61)
        .with_geometry(ArrayGeometry::Hexagonal)
        .with_thickness(1.5e-4);
    Lamina::new(def).unwrap()
}

#[test]
fn homogenized_constants() {
    init_logging();
    let lamina = carbon_epoxy_ply();
    let m = lamina.material();

    // Rule of mixtures: 0.61 * 233 + 0.39 * 4.62 = 143.9318 GPa
    assert_relative_eq!(m.e[0], 143.9318e9, epsilon = 0.0, max_relative = 1e-12);

    // Halpin-Tsai with xi = 1: ratio 5, eta = 2/3
    let eta = 4.0 / 6.0;
    let e2 = 4.62e9 * (1.0 + eta * 0.61) / (1.0 - eta * 0.61);
    assert_relative_eq!(m.e[1], e2, epsilon = 0.0, max_relative = 1e-12);
    assert!(m.e[1] > 4.62e9 && m.e[1] < 23.1e9);

    assert_eq!(m.e[1], m.e[2]);
    assert_eq!(m.g[1], m.g[2]);
    assert_eq!(m.name, "fiber/matrix");
    assert_eq!(lamina.matrix_volume(), 1.0 - 0.61);
}

#[test]
fn stiffness_inverts_compliance() {
    init_logging();
    let lamina = carbon_epoxy_ply();

    assert_relative_eq!(
        lamina.compliance() * lamina.stiffness(),
        Mat6::identity(),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        lamina.reduced_compliance() * lamina.reduced_stiffness(),
        Mat3::identity(),
        epsilon = 1e-9
    );
}

#[test]
fn transverse_load_restrained_through_thickness() {
    init_logging();
    let lamina = carbon_epoxy_ply();
    let s = lamina.compliance();

    let stress = StressTensor::uniaxial(2, 125e6).unwrap();
    let options = SolverOptions::default().with_logging();
    let state = lamina
        .solve_boundary_conditions(&stress, Direction::Three, &[], &options)
        .unwrap();

    assert_eq!(state.strain[2], 0.0);
    assert_relative_eq!(
        state.stress[2],
        -125e6 * s[(2, 1)] / s[(2, 2)],
        epsilon = 0.0,
        max_relative = 1e-12
    );

    // E2 = E3, so the restraint stress is v23 * s2
    let v23 = lamina.material().v[0];
    assert_relative_eq!(state.stress[2], v23 * 125e6, epsilon = 0.0, max_relative = 1e-9);
}

#[test]
fn cool_down_with_through_thickness_restraint() {
    init_logging();
    let lamina = carbon_epoxy_ply();
    let thermal = lamina.thermal_strain(-150.0);

    let state = lamina
        .solve_boundary_conditions(
            &StressTensor::default(),
            Direction::Three,
            &[thermal],
            &SolverOptions::default(),
        )
        .unwrap();

    // Contraction is blocked, so the ply is pulled into tension
    assert!(state.stress[2] > 0.0);
    assert_eq!(state.strain[2], 0.0);

    // Unrestrained, the ply simply shrinks
    let free = lamina.free_response(&StressTensor::default(), &[thermal]);
    assert_eq!(free.stress, Vec6::zeros());
    assert!(free.strain[2] < 0.0);
}

#[test]
fn rotated_ply_round_trip() {
    init_logging();
    let mut lamina = carbon_epoxy_ply();
    lamina.set_orientation_deg(45.0).unwrap();

    let global = Vec3::new(80e6, -20e6, 15e6);
    let strain = lamina.plane_stress_to_strain(&global);
    assert_relative_eq!(lamina.plane_strain_to_stress(&strain), global, max_relative = 1e-9);

    // Back at 0 degrees the ply matrices coincide with the material ones
    lamina.set_orientation_deg(0.0).unwrap();
    assert_eq!(lamina.transformed_compliance(), lamina.reduced_compliance());
    assert_eq!(lamina.transformation(), &Mat3::identity());
}

#[test]
fn laminate_keeps_stacking_order() {
    init_logging();
    let mut laminate = Laminate::new();
    for angle in [0.0, 90.0, 90.0, 0.0] {
        let mut ply = carbon_epoxy_ply();
        ply.set_orientation_deg(angle).unwrap();
        laminate.add_lamina(ply);
    }

    assert_eq!(laminate.len(), 4);
    assert_relative_eq!(laminate.total_thickness(), 6e-4, max_relative = 1e-12);
    assert_relative_eq!(laminate.plies()[1].orientation_deg(), 90.0, epsilon = 1e-12);
}

#[test]
fn definition_serializes() {
    let def = LaminaDefinition::from_constituents(fiber(), matrix(), 0.61).with_orientation(30.0);
    let json = serde_json::to_string(&def).unwrap();
    let back: LaminaDefinition = serde_json::from_str(&json).unwrap();

    let a = Lamina::new(def).unwrap();
    let b = Lamina::new(back).unwrap();
    assert_eq!(a.material(), b.material());
    assert_eq!(a.transformed_stiffness(), b.transformed_stiffness());
}
