#[cfg(test)]
mod iterator_tests {
    use itertools::Itertools;

    use crate::{
        tests::utils::TEST_IMAGE_SIZE,
        utils::iterator::{GridIterator, row_columns},
    };

    fn missing_pixel(data: &[bool], width: usize) -> bool {
        let missed_pixel = data.iter().enumerate().find_map(|(idx, val)| match *val {
            true => None,
            false => Some(idx),
        });
        if let Some(pixel) = missed_pixel {
            let x = pixel % width;
            let y = pixel / width;
            println!("missed pixel {}: {} {}", pixel, x, y);
        }
        missed_pixel.is_some()
    }

    fn assert_visits_every_pixel_once(iter: GridIterator, width: usize, height: usize) {
        let mut visit = vec![false; width * height];
        for (x, y, idx) in iter {
            assert_eq!(width * y + x, idx, "1D pixel index missmatches 2D coordinates");
            assert!(!visit[idx], "Pixel visited twice");
            visit[idx] = true;
        }
        assert!(!missing_pixel(&visit, width), "Pixel not visited");
    }

    #[test]
    fn test_grid_iterator_visits_indices() {
        assert_visits_every_pixel_once(
            GridIterator::new(TEST_IMAGE_SIZE, TEST_IMAGE_SIZE),
            TEST_IMAGE_SIZE,
            TEST_IMAGE_SIZE,
        );
        assert_visits_every_pixel_once(GridIterator::new(7, 3), 7, 3);
    }

    #[test]
    fn test_serpentine_iterator_visits_indices() {
        assert_visits_every_pixel_once(
            GridIterator::with_serpentine(TEST_IMAGE_SIZE, TEST_IMAGE_SIZE, true),
            TEST_IMAGE_SIZE,
            TEST_IMAGE_SIZE,
        );
        assert_visits_every_pixel_once(GridIterator::with_serpentine(1, 5, true), 1, 5);
    }

    #[test]
    fn test_raster_order() {
        let order = GridIterator::new(3, 2).map(|(_, _, idx)| idx).collect_vec();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serpentine_order() {
        let order = GridIterator::with_serpentine(3, 3, true)
            .map(|(x, y, _)| (x, y))
            .collect_vec();
        assert_eq!(
            order,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (1, 1),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2),
            ]
        );
    }

    #[test]
    fn test_grid_iterator_len() {
        let mut iter = GridIterator::with_serpentine(4, 3, true);
        assert_eq!(iter.len(), 12);
        iter.nth(4);
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.count(), 7);
    }

    #[test]
    fn test_empty_grids() {
        assert_eq!(GridIterator::new(0, 10).count(), 0);
        assert_eq!(GridIterator::with_serpentine(10, 0, true).count(), 0);
    }

    #[test]
    fn test_row_columns_direction() {
        assert_eq!(row_columns(4, 0, true).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(row_columns(4, 1, true).collect_vec(), vec![3, 2, 1, 0]);
        assert_eq!(row_columns(4, 1, false).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(row_columns(4, 2, true).len(), 4);
    }

    #[test]
    fn test_row_columns_agree_with_grid_iterator() {
        let (width, height) = (5, 4);
        let from_rows = (0..height)
            .flat_map(|y| row_columns(width, y, true).map(move |x| (x, y)))
            .collect_vec();
        let from_grid = GridIterator::with_serpentine(width, height, true)
            .map(|(x, y, _)| (x, y))
            .collect_vec();
        assert_eq!(from_rows, from_grid);
    }
}
