mod tests {
    use ws281x_bitbang::buffer::{OutOfRange, PixelBuffer};
    use ws281x_bitbang::color::Rgb;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_new_buffer_is_black() {
        let buffer: PixelBuffer<5> = PixelBuffer::new();
        for i in 0..5 {
            assert_eq!(buffer.get(i), BLACK);
        }
    }

    #[test]
    fn test_last_write_wins() {
        let mut buffer: PixelBuffer<4> = PixelBuffer::new();
        buffer.set(2, RED);
        buffer.set(2, BLUE);
        buffer.set(0, RED);
        assert_eq!(buffer.get(2), BLUE);
        assert_eq!(buffer.get(0), RED);
        assert_eq!(buffer.get(1), BLACK);
        assert_eq!(buffer.get(3), BLACK);
    }

    #[test]
    fn test_try_set_out_of_range() {
        let mut buffer: PixelBuffer<3> = PixelBuffer::new();
        assert_eq!(buffer.try_set(2, RED), Ok(()));
        assert_eq!(buffer.try_set(3, RED), Err(OutOfRange { index: 3, len: 3 }));
        assert_eq!(
            buffer.try_set(100, RED),
            Err(OutOfRange {
                index: 100,
                len: 3
            })
        );
    }

    #[test]
    fn test_try_get_out_of_range() {
        let mut buffer: PixelBuffer<3> = PixelBuffer::new();
        buffer.set(1, BLUE);
        assert_eq!(buffer.try_get(1), Ok(BLUE));
        assert_eq!(buffer.try_get(3), Err(OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_lengths() {
        let buffer: PixelBuffer<7> = PixelBuffer::new();
        assert_eq!(buffer.len(), 7);
        assert_eq!(buffer.byte_len(), 21);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let buffer: PixelBuffer<0> = PixelBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.byte_len(), 0);
        assert_eq!(buffer.try_get(0), Err(OutOfRange { index: 0, len: 0 }));
        assert_eq!(buffer.bytes().count(), 0);
    }

    #[test]
    fn test_bytes_storage_order() {
        let mut buffer: PixelBuffer<2> = PixelBuffer::new();
        buffer.set(0, Rgb::new(1, 2, 3));
        buffer.set(1, Rgb::new(4, 5, 6));
        let bytes: Vec<u8> = buffer.bytes().collect();
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_fill_from() {
        let mut buffer: PixelBuffer<3> = PixelBuffer::new();
        buffer.fill_from(&[RED, BLUE, RED, BLUE]);
        assert_eq!(buffer.as_slice(), &[RED, BLUE, RED]);

        buffer.fill_from(&[BLUE]);
        assert_eq!(buffer.as_slice(), &[BLUE, BLUE, RED]);
    }
}
