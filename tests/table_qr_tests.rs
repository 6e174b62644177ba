#[cfg(test)]
mod render_tests {
    use image::{GrayImage, Rgb};
    use test_case::test_case;

    use table_qr::{
        common::{eye_geometry, Corner, PixelBox},
        render::{CircleModuleDrawer, EyeDrawer},
        EyeStyle, FillMask, ModuleStyle, QRBuilder, Renderer, Version,
    };

    const FRONT: Rgb<u8> = Rgb([190, 232, 32]);
    const BACK: Rgb<u8> = Rgb([1, 68, 78]);
    const LINK: &[u8] = b"https://order.example.com/market/62?deliveryType=MarketTable&table=007";

    #[test]
    fn test_default_output_layout() {
        let img = QRBuilder::new(LINK).render().unwrap();
        assert_eq!(img.dimensions(), (1800, 1800));

        // Quiet zone is pure background
        for (x, y) in [(0, 0), (159, 900), (1799, 1799), (900, 1640)] {
            assert_eq!(*img.get_pixel(x, y), BACK, "pixel {x} {y}");
        }

        // North-west eye spans 160..=439, outline 40px wide
        assert_eq!(*img.get_pixel(300, 160), FRONT);
        assert_eq!(*img.get_pixel(300, 199), FRONT);
        assert_eq!(*img.get_pixel(300, 210), BACK);
        assert_eq!(*img.get_pixel(160, 160), BACK);
        assert_eq!(*img.get_pixel(439, 439), FRONT);

        // Hamburger bars: 240..=278, 286..=324, 332..=370 with 8px gaps
        assert_eq!(*img.get_pixel(300, 260), FRONT);
        assert_eq!(*img.get_pixel(300, 282), BACK);
        assert_eq!(*img.get_pixel(300, 300), FRONT);
        assert_eq!(*img.get_pixel(300, 328), BACK);
        assert_eq!(*img.get_pixel(300, 350), FRONT);
    }

    #[test_case(Corner::NorthWest)]
    #[test_case(Corner::NorthEast)]
    #[test_case(Corner::SouthWest)]
    fn test_each_eye_has_one_square_corner(corner: Corner) {
        let img = QRBuilder::new(LINK).render().unwrap();
        let PixelBox { x0, y0, x1, y1 } = eye_geometry(corner, 37, 40, 4).eye;
        let corners = [(x0, y0), (x1, y0), (x1, y1), (x0, y1)];
        let square = corners.iter().filter(|&&(x, y)| *img.get_pixel(x, y) == FRONT).count();
        assert_eq!(square, 1);
    }

    #[test]
    fn test_plain_render_keeps_finder_squares() {
        let img = QRBuilder::new(LINK)
            .box_size(10)
            .module_style(ModuleStyle::Square)
            .eye_style(EyeStyle::Standard)
            .palette(FillMask::new(table_qr::Rgb::WHITE, table_qr::Rgb::BLACK))
            .render()
            .unwrap();
        assert_eq!(img.dimensions(), (450, 450));
        // Sharp finder corner and the 3x3 center
        assert_eq!(*img.get_pixel(40, 40), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(75, 75), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(55, 55), Rgb([255, 255, 255]));
    }

    struct BoxEyes;

    impl EyeDrawer for BoxEyes {
        fn draw_eye(&self, canvas: &mut GrayImage, _corner: Corner, bx: PixelBox) {
            canvas.put_pixel(bx.x0, bx.y0, image::Luma([0]));
        }

        fn draw_eyeball(&self, canvas: &mut GrayImage, _corner: Corner, bx: PixelBox) {
            canvas.put_pixel(bx.x1, bx.y1, image::Luma([0]));
        }
    }

    #[test]
    fn test_custom_eye_drawer() {
        let qr = QRBuilder::new(LINK).version(Version::new(5).unwrap()).build().unwrap();
        let renderer = Renderer::with_drawers(
            10,
            4,
            Box::new(CircleModuleDrawer::new(10).unwrap()),
            Some(Box::new(BoxEyes)),
            FillMask::default(),
        );
        let canvas = renderer.render_canvas(&qr).unwrap();

        for corner in [Corner::NorthWest, Corner::NorthEast, Corner::SouthWest] {
            let geo = eye_geometry(corner, qr.width(), 10, 4);
            assert_eq!(canvas.get_pixel(geo.eye.x0, geo.eye.y0)[0], 0);
            assert_eq!(canvas.get_pixel(geo.eyeball.x1, geo.eyeball.y1)[0], 0);
            // Finder modules are left to the eye drawer only
            assert_eq!(canvas.get_pixel(geo.eye.x0 + 15, geo.eye.y0 + 5)[0], 255);
        }
    }
}

#[cfg(test)]
mod batch_tests {
    use std::fs;

    use table_qr::{Batch, QRError, RenderOptions};

    #[test]
    fn test_batch_writes_one_png_per_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut batch = Batch::new("order.example.com", "62", "3", Some(dir.path())).unwrap();
        batch.options(RenderOptions { box_size: 8, ..RenderOptions::default() });

        let written = batch.run().unwrap();
        let names: Vec<_> =
            written.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["62001.png", "62002.png", "62003.png"]);

        for path in &written {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (360, 360));
        }
    }

    #[test]
    fn test_batch_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("codes");
        let mut batch = Batch::new("order.example.com", "4", "7;120", Some(out.as_path())).unwrap();
        batch.options(RenderOptions { box_size: 4, border: 1, ..RenderOptions::default() });

        batch.run().unwrap();
        let mut files: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        assert_eq!(files, ["4007.png", "4120.png"]);
    }

    #[test]
    fn test_batch_stops_on_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let host = "a".repeat(200);
        let mut batch = Batch::new(&host, "62", "2", Some(dir.path())).unwrap();
        batch.options(RenderOptions { box_size: 2, ..RenderOptions::default() });

        assert!(matches!(batch.run(), Err(QRError::DataTooLong { version: 5 })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
