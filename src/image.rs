use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use id_arena::Id;
use image::{ColorType, DynamicImage, ImageFormat};
use log::debug;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::io::Read;

enum RasterImage {
    /// Baseline RGB JPEG data, which PDF readers can decode themselves
    DirectlyEmbeddableJpeg(Vec<u8>),
    Decoded(DynamicImage),
}

/// A decoded raster image. An image is stored once in the document and can be drawn on any
/// number of pages, any number of times.
pub struct Image {
    image: RasterImage,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Decode an image from its encoded bytes, in any format the [image] crate recognises.
    pub fn decode(data: Vec<u8>) -> Result<Image, PDFError> {
        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;
        debug!(
            "decoded {:?} image, {}x{} {:?}",
            format,
            image.width(),
            image.height(),
            image.color()
        );

        match (format, image.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => Ok(Image {
                width: image.width(),
                height: image.height(),
                image: RasterImage::DirectlyEmbeddableJpeg(data),
            }),
            _ => Ok(Image::from_dynamic(image)),
        }
    }

    /// Read an encoded image to the end and decode it
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Image, PDFError> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|source| PDFError::InputRead {
                what: "image",
                source,
            })?;
        Image::decode(data)
    }

    pub fn from_dynamic(image: DynamicImage) -> Image {
        Image {
            width: image.width(),
            height: image.height(),
            image: RasterImage::Decoded(image),
        }
    }

    fn encode(&self) -> EncodeOutput {
        match &self.image {
            RasterImage::DirectlyEmbeddableJpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            RasterImage::Decoded(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Image>, writer: &mut Pdf) {
        let image_index = id.index();
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
