#[cfg(test)]
mod sweep_tests {
    use itertools::Itertools;

    use crate::{
        color_palette::{Compression, Theme},
        config::SweepConfig,
        dithering::DitherConfig,
        error::DitherError,
        sweep::{self, output_filename},
        tests::utils::*,
        texture::TextureRef,
    };

    #[test]
    fn test_default_sweep_covers_every_pair() {
        let source = gen_random_image(24, 3);
        let config = SweepConfig::default();
        let outputs = sweep::run(&config, &source)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(outputs.len(), 20);
        let pairs = outputs
            .iter()
            .map(|output| (output.theme, output.compression))
            .collect_vec();
        let expected = Theme::ALL
            .into_iter()
            .cartesian_product(Compression::ALL)
            .collect_vec();
        assert_eq!(pairs, expected);

        for output in &outputs {
            assert_eq!(output.palette.len(), output.compression.colors_len());
            assert_eq!(output.image.shape(), source.shape());
        }
    }

    #[test]
    fn test_sweep_honors_selection() {
        let source = gen_gradient_image(32, 8);
        let config = SweepConfig {
            themes: vec![Theme::Grayscale],
            compressions: vec![Compression::Full, Compression::None],
            dither: DitherConfig::default(),
        };
        let outputs = sweep::run(&config, &source)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].compression, Compression::Full);
        assert_eq!(outputs[1].compression, Compression::None);
        assert_eq!(outputs[0].palette.len(), 2);
    }

    #[test]
    fn test_sweep_matches_single_dither() {
        let source = gen_random_image(16, 8);
        let config = SweepConfig {
            themes: vec![Theme::HighTech],
            compressions: vec![Compression::Quarter],
            dither: DitherConfig::default(),
        };
        let output = sweep::run(&config, &source).next().unwrap().unwrap();
        let expected = crate::dithering::dither(&source, &output.palette, &config.dither).unwrap();
        assert_eq!(output.image, expected);
    }

    #[test]
    fn test_sweep_reports_errors_per_output() {
        let source = gen_random_image(4, 1);
        let config = SweepConfig {
            dither: DitherConfig::default().with_matrix_size(5),
            ..SweepConfig::default()
        };
        let results = sweep::run(&config, &source).collect_vec();
        assert_eq!(results.len(), config.combinations());
        assert!(
            results
                .iter()
                .all(|result| matches!(result, Err(DitherError::InvalidMatrixSize(5))))
        );
    }

    #[test]
    fn test_output_filenames() {
        assert_eq!(
            output_filename("IMG_9916", Theme::Grayscale, Compression::Half),
            "IMG_9916_dithered_grayscale_50%.png"
        );
        assert_eq!(
            output_filename("photo", Theme::LowTech, Compression::None),
            "photo_dithered_low-tech_0%.png"
        );
        assert_eq!(
            output_filename("a.b", Theme::HighTech, Compression::Full),
            "a.b_dithered_high-tech_100%.png"
        );
    }
}
