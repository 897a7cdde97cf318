use pdf_compose::*;

#[test]
fn test_render_fits_inside_margins() {
    let cases = [
        (100.0, 50.0, 210.0, 297.0, 10.0),
        (50.0, 400.0, 215.9, 279.4, 20.0),
        (3000.0, 10.0, 210.0, 297.0, 0.0),
        (5.0, 5.0, 148.0, 210.0, 5.0),
    ];

    for (img_w, img_h, page_w, page_h, margin) in cases {
        let p = fit_and_center(img_w, img_h, page_w, page_h, margin).unwrap();
        assert!(
            p.render_width_mm <= page_w - 2.0 * margin + 0.001,
            "width overflow for {:?}",
            (img_w, img_h, page_w, page_h, margin)
        );
        assert!(
            p.render_height_mm <= page_h - 2.0 * margin + 0.001,
            "height overflow for {:?}",
            (img_w, img_h, page_w, page_h, margin)
        );
    }
}

#[test]
fn test_aspect_ratio_preserved() {
    let p = fit_and_center(1000.0, 400.0, 210.0, 297.0, 10.0).unwrap();
    let source_ratio = 1000.0 / 400.0;
    let render_ratio = p.render_width_mm / p.render_height_mm;
    assert!((source_ratio - render_ratio).abs() < 0.001);
}

#[test]
fn test_image_centered_on_both_axes() {
    let p = fit_and_center(120.0, 90.0, 215.9, 279.4, 20.0).unwrap();
    assert!((p.offset_x_mm + p.render_width_mm / 2.0 - 215.9 / 2.0).abs() < 0.001);
    assert!((p.offset_y_mm + p.render_height_mm / 2.0 - 279.4 / 2.0).abs() < 0.001);
}

#[test]
fn test_small_image_scaled_up() {
    // 10x10mm source on A4 with small margin: fills 190mm of width
    let p = fit_and_center(10.0, 10.0, 210.0, 297.0, 10.0).unwrap();
    assert!((p.render_width_mm - 190.0).abs() < 0.001);
    assert!((p.render_height_mm - 190.0).abs() < 0.001);
}

#[test]
fn test_invalid_layout_when_margin_swallows_page() {
    // A4 portrait is 210mm wide; a 200mm margin leaves a negative area
    let result = fit_and_center(100.0, 100.0, 210.0, 297.0, 200.0);
    match result {
        Err(ComposeError::InvalidLayout { margin_mm, .. }) => {
            assert_eq!(margin_mm, 200.0);
        }
        other => panic!("Expected InvalidLayout, got {:?}", other),
    }

    // Exactly half the smaller dimension also leaves nothing
    let result = fit_and_center(100.0, 100.0, 210.0, 297.0, 105.0);
    assert!(matches!(result, Err(ComposeError::InvalidLayout { .. })));
}

#[test]
fn test_auto_page_dimensions() {
    let options = ComposeOptions {
        page_size: PageSize::Auto,
        margin: Margin::Small,
        ..Default::default()
    };
    let p = plan_page(
        PixelDimensions {
            width: 1000,
            height: 500,
        },
        &options,
    )
    .unwrap();

    assert!((p.page_width_mm - 284.583).abs() < 0.01);
    assert!((p.page_height_mm - 152.2915).abs() < 0.01);
}

#[test]
fn test_fixed_page_dimensions_constant_across_images() {
    let options = ComposeOptions {
        page_size: PageSize::Letter,
        orientation: Orientation::Landscape,
        margin: Margin::None,
        ..Default::default()
    };
    let dims = [
        PixelDimensions {
            width: 100,
            height: 900,
        },
        PixelDimensions {
            width: 4000,
            height: 50,
        },
    ];
    let plans = plan_pages(&dims, &options).unwrap();

    for p in &plans {
        assert!((p.page_width_mm - 279.4).abs() < 0.001);
        assert!((p.page_height_mm - 215.9).abs() < 0.001);
    }
}

#[test]
fn test_plan_pages_preserves_order() {
    let options = ComposeOptions {
        page_size: PageSize::Auto,
        margin: Margin::None,
        ..Default::default()
    };
    let dims = [
        PixelDimensions {
            width: 100,
            height: 100,
        },
        PixelDimensions {
            width: 200,
            height: 100,
        },
        PixelDimensions {
            width: 300,
            height: 100,
        },
    ];
    let plans = plan_pages(&dims, &options).unwrap();

    assert_eq!(plans.len(), 3);
    assert!(plans[0].page_width_mm < plans[1].page_width_mm);
    assert!(plans[1].page_width_mm < plans[2].page_width_mm);
}

#[test]
fn test_planning_is_deterministic() {
    let options = ComposeOptions::default();
    let dims = [
        PixelDimensions {
            width: 640,
            height: 480,
        },
        PixelDimensions {
            width: 1920,
            height: 1080,
        },
    ];

    let first = plan_pages(&dims, &options).unwrap();
    let second = plan_pages(&dims, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_plan_pages_empty_input() {
    let result = plan_pages(&[], &ComposeOptions::default());
    assert!(matches!(result, Err(ComposeError::EmptyInput)));
}
