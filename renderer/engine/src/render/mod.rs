pub mod sdl;
