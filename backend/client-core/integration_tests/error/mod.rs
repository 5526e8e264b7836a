mod translation_client;
