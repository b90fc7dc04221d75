//! Tests for tiling parameter defaults, validation, and geometry resolution

#[cfg(test)]
mod tests {
    use tilemaker::TileError;
    use tilemaker::synthesis::args::{BackgroundColor, TileArgs};

    // Tests defaults match the documented parameter table
    // Verified by changing the default octave
    #[test]
    fn test_defaults() {
        let args = TileArgs::default();

        assert_eq!(args.bg_color, BackgroundColor { r: 0.0, g: 0.0, b: 0.0 });
        assert_eq!(args.octave, 2);
        assert_eq!((args.patch_height, args.patch_width), (-1, -1));
        assert!((args.blur - 0.5).abs() < f32::EPSILON);
        assert!(args.rotation_base.abs() < f32::EPSILON);
        assert!(args.rotation_var.abs() < f32::EPSILON);
        assert!((args.scale_base - 1.0).abs() < f32::EPSILON);
        assert!(args.scale_var.abs() < f32::EPSILON);
        assert_eq!(args.seed, 0);
        assert!(args.validate().is_ok());
    }

    // Tests automatic patch size is source dimension over grid side
    // Verified by dividing by octave instead of 2^octave
    #[test]
    fn test_resolve_automatic_patch() {
        let args = TileArgs::default();
        let geometry = args.resolve_geometry(64, 32).expect("canvas is large enough");

        assert_eq!(geometry.grid_side, 4);
        assert_eq!(geometry.cell_count(), 16);
        assert_eq!((geometry.patch_height, geometry.patch_width), (16, 8));
        assert_eq!((geometry.canvas_height, geometry.canvas_width), (64, 32));
    }

    // Tests explicit patch sizes are kept and zero counts as automatic
    // Verified by treating zero as an explicit size
    #[test]
    fn test_resolve_explicit_patch() {
        let args = TileArgs {
            octave: 1,
            patch_height: 5,
            patch_width: 0,
            ..TileArgs::default()
        };
        let geometry = args.resolve_geometry(20, 30).expect("canvas is large enough");

        assert_eq!((geometry.patch_height, geometry.patch_width), (5, 15));
        assert_eq!(args.patch_width, 0, "caller arguments are not modified");
    }

    // Tests cell spans cover an uneven canvas exactly, differing by at most one pixel
    // Verified by giving every cell the truncated patch size
    #[test]
    fn test_cell_spans_cover_canvas() {
        let geometry = TileArgs::default()
            .resolve_geometry(9, 13)
            .expect("canvas is large enough");

        let rows: Vec<(usize, usize)> = (0..4).map(|c| geometry.row_span(c)).collect();
        let columns: Vec<(usize, usize)> = (0..4).map(|c| geometry.column_span(c)).collect();
        assert_eq!(rows, vec![(0, 2), (2, 2), (4, 2), (6, 3)]);
        assert_eq!(columns, vec![(0, 3), (3, 3), (6, 3), (9, 4)]);

        assert!(geometry.auto_height && geometry.auto_width);
        assert_eq!((geometry.patch_height, geometry.patch_width), (2, 3));
        assert_eq!(geometry.patch_for(3, 3), (3, 4));
        assert_eq!(geometry.patch_for(0, 0), (2, 3));
    }

    // Tests explicit patch sizes ignore the cell extent
    // Verified by using cell spans for explicit patches
    #[test]
    fn test_explicit_patch_is_fixed() {
        let args = TileArgs {
            patch_height: 4,
            ..TileArgs::default()
        };
        let geometry = args.resolve_geometry(9, 13).expect("canvas is large enough");

        assert!(!geometry.auto_height);
        assert!(geometry.auto_width);
        assert_eq!(geometry.patch_for(3, 3), (4, 4));
        assert_eq!(geometry.patch_for(0, 0), (4, 3));
    }

    // Tests a canvas smaller than the grid cannot derive a patch
    // Verified by removing the zero patch check
    #[test]
    fn test_resolve_rejects_empty_patch() {
        let args = TileArgs::default();

        assert!(matches!(
            args.resolve_geometry(3, 16),
            Err(TileError::InvalidParameter {
                parameter: "patch_height",
                ..
            })
        ));
    }

    // Tests geometry resolution rejects octaves past the limit without overflowing
    // Verified by shifting by the octave unchecked
    #[test]
    fn test_resolve_rejects_huge_octave() {
        for octave in [13, 64, 70] {
            let args = TileArgs {
                octave,
                ..TileArgs::default()
            };
            assert!(matches!(
                args.resolve_geometry(1 << 20, 1 << 20),
                Err(TileError::InvalidParameter {
                    parameter: "octave",
                    ..
                })
            ));
        }
    }

    // Tests out-of-range parameters fail validation
    // Verified by only checking blur
    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            ("octave", TileArgs { octave: 13, ..TileArgs::default() }),
            ("blur", TileArgs { blur: 0.0, ..TileArgs::default() }),
            ("blur", TileArgs { blur: f32::NAN, ..TileArgs::default() }),
            ("scale_base", TileArgs { scale_base: f32::INFINITY, ..TileArgs::default() }),
            ("scale_var", TileArgs { scale_var: -0.1, ..TileArgs::default() }),
            ("rotation_var", TileArgs { rotation_var: -1.0, ..TileArgs::default() }),
            (
                "bg_color.g",
                TileArgs {
                    bg_color: BackgroundColor { r: 0.0, g: f32::NAN, b: 0.0 },
                    ..TileArgs::default()
                },
            ),
        ];

        for (expected, args) in cases {
            match args.validate() {
                Err(TileError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    // Tests background colour parsing from R,G,B
    // Verified by parsing components in reverse order
    #[test]
    fn test_parse_background_color() {
        let color: BackgroundColor = "0.25, 0.5,1".parse().expect("three components");
        assert_eq!(color, BackgroundColor { r: 0.25, g: 0.5, b: 1.0 });
        assert_eq!(color.channels(), [0.25, 0.5, 1.0]);

        assert!("1,2".parse::<BackgroundColor>().is_err());
        assert!("1,2,3,4".parse::<BackgroundColor>().is_err());
        assert!("red,0,0".parse::<BackgroundColor>().is_err());
    }
}
