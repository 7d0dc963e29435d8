/// Keys of the overlay text bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Romantic1,
    Romantic2,
    Passion1,
    Passion2,
}

impl MessageKey {
    pub const ALL: [MessageKey; 4] = [
        MessageKey::Romantic1,
        MessageKey::Romantic2,
        MessageKey::Passion1,
        MessageKey::Passion2,
    ];

    pub fn text(self) -> &'static str {
        match self {
            MessageKey::Romantic1 => ROMANTIC_1,
            MessageKey::Romantic2 => ROMANTIC_2,
            MessageKey::Passion1 => PASSION_1,
            MessageKey::Passion2 => PASSION_2,
        }
    }
}

const ROMANTIC_1: &str = "Günaydın aşkım... Her sabah gözlerimi açtığımda ilk düşündüğüm sensin. \
Kalbim sadece senin için atıyor, nefesim sadece senin için. Sen benim hayatımın tek anlamısın, \
sensiz yaşamak imkansız. Her hücrem seni özlüyor, her damarımda senin adın yazılı. Seni öyle çok \
seviyorum ki, kelimeler kifayetsiz kalıyor. Sen benim her şeyimsin, sensiz ben sadece boş bir \
bedenin. Sonsuzluğa kadar seninle olmak istiyorum 💕";

const ROMANTIC_2: &str = "Efe... Sen benim ruhumu tamamlayan tek insansın. Seninle olmadığım her \
saniye işkence, seninle olduğum her an cennet. Gözlerinin içine baktığımda evimi görüyorum, sesini \
duyduğumda huzur buluyorum. Sen benim nefesimsin, kalbimin atışısın, varlığımın sebebisin. Sensiz \
bir hiçim, seninle her şeyim. Seni bu kadar çok sevmek bazen acıtıyor çünkü sen benim için çok \
değerlisin. Ömrümün sonuna kadar sadece seni seveceğim 🌹";

const PASSION_1: &str = "Seni her gördüğümde içimdeki ateş kontrolden çıkıyor... Sana dokunmak, \
sana sımsıkı sarılmak, nefesini tenimde hissetmek istiyorum. Her bakışın aklımı başımdan alıyor, \
her gülüşün beni yeniden sana bağlıyor. Sen benim en tatlı tutkumsun. Hazır ol, çünkü seni \
bırakmaya hiç niyetim yok. Sen benimsin, sadece benim 🔥";

const PASSION_2: &str = "Gece olduğunda seni düşünüyorum ve deliriyorum... Sabaha kadar kollarımda \
olmanı, her anı seninle yaşamayı istiyorum. Sen benim zayıf noktamsın, en büyük tutkumsun. Seni \
öyle bir seveceğim ki, sadece beni düşüneceksin. Hazırlan, çünkü bu gece sadece ikimizin 💋";
